//! Reading gene protein reaction rules from SBML reactions
//!
//! Level 2 documents keep the GPR as free text in the reaction notes
//! (`<p>GENE_ASSOCIATION: (b0001 or b0002)</p>`), level 3 documents using the fbc package
//! store it as a tree of `fbc:or`, `fbc:and` and `fbc:geneProductRef` elements. Either way the
//! result is a GPR string together with the set of genes found by splitting that string.
use indexmap::IndexSet;
use roxmltree::Node;
use serde::{Deserialize, Serialize};

use crate::configuration::NotePatterns;
use crate::io::sbml::locate::{attribute, child_elements, find_first};

/// How gene associations are encoded in a document, taken from the `level` attribute of the
/// `<sbml>` element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatLevel {
    /// Levels 1 and 2, GPR written in the reaction notes
    Legacy,
    /// Level 3 and above, GPR stored in `fbc:geneProductAssociation`
    Structured,
}

impl FormatLevel {
    pub fn from_level(level: u32) -> FormatLevel {
        if level < 3 {
            FormatLevel::Legacy
        } else {
            FormatLevel::Structured
        }
    }
}

/// A GPR string and the genes it references, `None` for both if there are no genes
pub type GeneAssociation = (Option<String>, Option<IndexSet<String>>);

/// Tree read from an `fbc:geneProductAssociation`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Association {
    /// A `geneProductRef` leaf, holding the gene id with the configured prefix removed
    Gene(String),
    Or(Vec<Association>),
    And(Vec<Association>),
}

impl Association {
    /// Read the association children of `node`
    ///
    /// Elements other than `or`, `and` and `geneProductRef` are skipped, as are gene product
    /// references without a `geneProduct` attribute.
    pub fn read_children(node: Node, gene_prefix: &str) -> Vec<Association> {
        child_elements(node)
            .filter_map(|child| match child.tag_name().name() {
                "geneProductRef" => attribute(child, "geneProduct").map(|id| {
                    let id = id.strip_prefix(gene_prefix).unwrap_or(id);
                    Association::Gene(id.to_string())
                }),
                "or" => Some(Association::Or(Association::read_children(
                    child,
                    gene_prefix,
                ))),
                "and" => Some(Association::And(Association::read_children(
                    child,
                    gene_prefix,
                ))),
                _ => None,
            })
            .collect()
    }

    /// Render this node as a GPR string
    ///
    /// Groups are always wrapped in parenthesis. With `drop_and` set, `and` groups render as
    /// nothing and are left out of their parent.
    pub fn render(&self, drop_and: bool) -> Option<String> {
        match self {
            Association::Gene(id) => Some(id.clone()),
            Association::Or(children) => {
                Some(format!("({})", render_group(children, " or ", drop_and)))
            }
            Association::And(_) if drop_and => None,
            Association::And(children) => {
                Some(format!("({})", render_group(children, " and ", drop_and)))
            }
        }
    }
}

/// Render and join `children` with `separator`, skipping any that render to nothing
pub fn render_group(children: &[Association], separator: &str, drop_and: bool) -> String {
    children
        .iter()
        .filter_map(|child| child.render(drop_and))
        .collect::<Vec<String>>()
        .join(separator)
}

/// Find the subsystem in a reaction's notes text
pub fn read_subsystem(notes: &str, patterns: &NotePatterns) -> Option<String> {
    NotePatterns::capture(&patterns.subsystem, notes)
}

/// Read the gene association of `reaction`
///
/// # Parameters
/// - `reaction`: The `reaction` element
/// - `notes`: Raw text of the reaction's notes (empty if it has none)
/// - `level`: Format level of the document
/// - `patterns`: Compiled configuration
pub fn read_gene_association(
    reaction: Node,
    notes: &str,
    level: FormatLevel,
    patterns: &NotePatterns,
) -> GeneAssociation {
    let gpr = match level {
        FormatLevel::Legacy => NotePatterns::capture(&patterns.gpr, notes),
        FormatLevel::Structured => find_first(reaction, "geneProductAssociation")
            .map(|gpa| structured_gpr(gpa, patterns)),
    };
    normalize(gpr, patterns)
}

/// Flatten an `fbc:geneProductAssociation` into a GPR string
pub fn structured_gpr(association: Node, patterns: &NotePatterns) -> String {
    let children = Association::read_children(association, &patterns.gene_prefix);
    render_group(&children, "", patterns.drop_and_groups)
}

/// Split `gpr` into genes, returning `(None, None)` if no genes are found
pub fn normalize(gpr: Option<String>, patterns: &NotePatterns) -> GeneAssociation {
    let Some(gpr) = gpr else {
        return (None, None);
    };
    let genes = patterns.split_genes(&gpr);
    if genes.is_empty() {
        (None, None)
    } else {
        (Some(gpr), Some(genes))
    }
}
