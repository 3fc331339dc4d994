//! This module provides a struct for representing reactions
use derive_builder::Builder;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::metabolic_model::species::Species;

/// Represents a reaction in the metabolic model
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Used to identify the reaction
    pub id: String,
    /// Human-readable reaction name
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Whether the reaction can carry flux in both directions
    #[builder(default = "false")]
    pub reversible: bool,
    /// Species consumed by the reaction, in document order
    ///
    /// ### Note
    /// These are copies of the entries in the model's species map, changing one does not
    /// change the other.
    #[builder(default = "Vec::new()")]
    pub reactants: Vec<Species>,
    /// Species produced by the reaction, in document order
    #[builder(default = "Vec::new()")]
    pub products: Vec<Species>,
    /// Reaction subsystem
    #[builder(default = "None")]
    pub subsystem: Option<String>,
    /// Gene Protein Reaction rule, e.g. `(b3916 or b1723)`
    #[builder(default = "None")]
    pub gpr: Option<String>,
    /// Genes referenced by the GPR rule
    ///
    /// Never an empty set, if there are no genes this is `None` (and so is `gpr`)
    #[builder(default = "None")]
    pub genes: Option<IndexSet<String>>,
}

impl Reaction {
    /// Check whether the reaction has no reactants or no products (exchange, demand, sink)
    pub fn is_boundary(&self) -> bool {
        self.reactants.is_empty() || self.products.is_empty()
    }

    /// Check whether `gene_id` is part of this reaction's GPR
    pub fn has_gene(&self, gene_id: &str) -> bool {
        self.genes
            .as_ref()
            .map(|genes| genes.contains(gene_id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolic_model::species::SpeciesBuilder;

    #[test]
    fn builder_defaults() {
        let reaction = ReactionBuilder::default()
            .id("EX_glc__D_e".to_string())
            .build()
            .unwrap();
        assert_eq!(reaction.name, None);
        assert!(!reaction.reversible);
        assert!(reaction.reactants.is_empty());
        assert!(reaction.products.is_empty());
        assert!(reaction.gpr.is_none());
        assert!(reaction.genes.is_none());
        assert!(reaction.is_boundary());
    }

    #[test]
    fn gene_membership() {
        let glc = SpeciesBuilder::default()
            .id("glc__D_e".to_string())
            .build()
            .unwrap();
        let reaction = ReactionBuilder::default()
            .id("GLCpts".to_string())
            .reactants(vec![glc.clone()])
            .products(vec![glc])
            .gpr(Some("(b2417 or b1621)".to_string()))
            .genes(Some(IndexSet::from(["b2417".to_string(), "b1621".to_string()])))
            .build()
            .unwrap();
        assert!(reaction.has_gene("b2417"));
        assert!(!reaction.has_gene("b0001"));
        assert!(!reaction.is_boundary());
    }
}
