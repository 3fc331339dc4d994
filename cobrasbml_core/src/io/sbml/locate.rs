//! Namespace agnostic element lookup
//!
//! `roxmltree` resolves namespaces while parsing, so a tag's local name (`tag_name().name()`)
//! already has any prefix removed. All lookups here compare local names only.
use roxmltree::Node;

/// Find the first element named `tag`, searching `node` itself and then its descendants in
/// document order
pub fn find_first<'a, 'input: 'a>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

/// Find all elements named `tag` in `node` (itself included) and its descendants, in
/// document order
pub fn find_all<'a, 'input: 'a>(node: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    node.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .collect()
}

/// Direct child elements of `node`
pub fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// Value of the attribute with local name `name`, whatever its namespace
///
/// SBML core attributes are unqualified, but package attributes (`fbc:charge`,
/// `fbc:geneProduct`) carry a namespace.
pub fn attribute<'a, 'input: 'a>(node: Node<'a, 'input>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name() == name)
        .map(|attr| attr.value())
}

/// Raw source text of `node`, from its start tag to its end tag
pub fn source_text<'a, 'input: 'a>(node: Node<'a, 'input>) -> &'input str {
    let input = node.document().input_text();
    input.get(node.range()).unwrap_or_default()
}
