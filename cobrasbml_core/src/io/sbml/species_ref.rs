//! Resolution of a reaction's species references against the model's species
use indexmap::IndexMap;
use roxmltree::Node;
use tracing::warn;

use crate::io::sbml::locate::{attribute, find_all};
use crate::metabolic_model::species::Species;

/// Resolve the `speciesReference` entries of a `listOfReactants`/`listOfProducts` node
///
/// # Parameters
/// - `list`: The list node, `None` if the reaction doesn't have one
/// - `reaction_id`: Id of the reaction, used in warnings
/// - `species`: Species already read from the document
/// - `warnings`: Collects a message for every reference that couldn't be resolved
///
/// # Returns
/// Copies of the referenced species in document order. References to unknown species are
/// left out.
pub fn resolve_species_refs(
    list: Option<Node>,
    reaction_id: &str,
    species: &IndexMap<String, Species>,
    warnings: &mut Vec<String>,
) -> Vec<Species> {
    let Some(list) = list else {
        return Vec::new();
    };
    let mut resolved = Vec::new();
    for reference in find_all(list, "speciesReference") {
        let Some(species_id) = attribute(reference, "species") else {
            let message = format!(
                "Reaction {} has a species reference without a species.",
                reaction_id
            );
            warn!("{}", message);
            warnings.push(message);
            continue;
        };
        match species.get(species_id) {
            Some(s) => resolved.push(s.clone()),
            None => {
                let message = format!("Reaction {} species {} not found.", reaction_id, species_id);
                warn!("{}", message);
                warnings.push(message);
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::sbml::locate::find_first;
    use crate::metabolic_model::species::SpeciesBuilder;
    use pretty_assertions::assert_eq;

    const REACTANTS: &str = r#"<listOfReactants>
  <speciesReference species="atp_c" stoichiometry="1"/>
  <speciesReference species="f6p_c" stoichiometry="1"/>
  <speciesReference species="missing_c" stoichiometry="1"/>
  <speciesReference stoichiometry="1"/>
</listOfReactants>"#;

    fn species_map() -> IndexMap<String, Species> {
        let mut species = IndexMap::new();
        for (id, name) in [("f6p_c", "D-Fructose 6-phosphate"), ("atp_c", "ATP")] {
            species.insert(
                id.to_string(),
                SpeciesBuilder::default()
                    .id(id.to_string())
                    .name(Some(name.to_string()))
                    .compartment(Some("c".to_string()))
                    .build()
                    .unwrap(),
            );
        }
        species
    }

    #[test]
    fn dangling_references() {
        let doc = roxmltree::Document::parse(REACTANTS).unwrap();
        let list = find_first(doc.root(), "listOfReactants");
        let species = species_map();
        let mut warnings = Vec::new();
        let resolved = resolve_species_refs(list, "PFK", &species, &mut warnings);
        let ids: Vec<&str> = resolved.iter().map(|s| s.id.as_str()).collect();
        // Document order, not species map order
        assert_eq!(ids, vec!["atp_c", "f6p_c"]);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], "Reaction PFK species missing_c not found.");
    }

    #[test]
    fn missing_list() {
        let species = species_map();
        let mut warnings = Vec::new();
        let resolved = resolve_species_refs(None, "EX_glc__D_e", &species, &mut warnings);
        assert!(resolved.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn resolved_species_are_copies() {
        let doc = roxmltree::Document::parse(REACTANTS).unwrap();
        let list = find_first(doc.root(), "listOfReactants");
        let species = species_map();
        let mut warnings = Vec::new();
        let first = resolve_species_refs(list, "PFK", &species, &mut warnings);
        let mut second = resolve_species_refs(list, "PFK", &species, &mut warnings);
        assert_eq!(first, second);
        second[0].name = Some("changed".to_string());
        assert_eq!(species["atp_c"].name.as_deref(), Some("ATP"));
        assert_eq!(first[0].name.as_deref(), Some("ATP"));
    }
}
