//! This module provides the Model struct for representing an entire metabolic model
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::io::sbml::FormatLevel;
use crate::metabolic_model::compartment::Compartment;
use crate::metabolic_model::reaction::Reaction;
use crate::metabolic_model::species::Species;

/// Represents a Genome Scale Metabolic Model read from an SBML document
///
/// No consistency checks are made between the maps, a reaction's species or a species'
/// compartment may be missing from the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Id associated with the Model
    pub id: Option<String>,
    /// Human readable name of the Model
    pub name: Option<String>,
    /// How gene associations were encoded in the source document
    pub level: FormatLevel,
    /// Map of species ids to Species
    pub species: IndexMap<String, Species>,
    /// Map of reaction ids to Reactions
    pub reactions: IndexMap<String, Reaction>,
    /// Map of compartment ids to Compartments
    pub compartments: IndexMap<String, Compartment>,
}

impl Model {
    pub fn new_empty(level: FormatLevel) -> Self {
        Model {
            id: None,
            name: None,
            level,
            species: IndexMap::new(),
            reactions: IndexMap::new(),
            compartments: IndexMap::new(),
        }
    }

    /// Add a species to the model, replacing any species with the same id
    pub fn add_species(&mut self, species: Species) {
        let id = species.id.clone();
        self.species.insert(id, species);
    }

    /// Add a reaction to the model, replacing any reaction with the same id
    ///
    /// # Examples
    /// ```rust
    /// use cobrasbml_core::io::sbml::FormatLevel;
    /// use cobrasbml_core::metabolic_model::model::Model;
    /// use cobrasbml_core::metabolic_model::reaction::ReactionBuilder;
    /// let mut model = Model::new_empty(FormatLevel::Structured);
    /// let new_reaction = ReactionBuilder::default()
    ///     .id("new_reaction".to_string())
    ///     .build()
    ///     .unwrap();
    /// model.add_reaction(new_reaction);
    /// ```
    pub fn add_reaction(&mut self, reaction: Reaction) {
        let id = reaction.id.clone();
        self.reactions.insert(id, reaction);
    }

    /// Add a compartment to the model, replacing any compartment with the same id
    pub fn add_compartment(&mut self, compartment: Compartment) {
        let id = compartment.id.clone();
        self.compartments.insert(id, compartment);
    }

    /// Reactions whose GPR references `gene_id`
    pub fn reactions_for_gene<'a>(
        &'a self,
        gene_id: &'a str,
    ) -> impl Iterator<Item = &'a Reaction> {
        self.reactions.values().filter(move |r| r.has_gene(gene_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolic_model::reaction::ReactionBuilder;
    use crate::metabolic_model::species::SpeciesBuilder;
    use indexmap::IndexSet;

    #[test]
    fn last_insert_wins() {
        let mut model = Model::new_empty(FormatLevel::Legacy);
        model.add_species(
            SpeciesBuilder::default()
                .id("atp_c".to_string())
                .name(Some("ATP".to_string()))
                .build()
                .unwrap(),
        );
        model.add_species(
            SpeciesBuilder::default()
                .id("atp_c".to_string())
                .name(Some("ATP C10H12N5O13P3".to_string()))
                .build()
                .unwrap(),
        );
        assert_eq!(model.species.len(), 1);
        assert_eq!(
            model.species["atp_c"].name.as_deref(),
            Some("ATP C10H12N5O13P3")
        );
    }

    #[test]
    fn gene_lookup() {
        let mut model = Model::new_empty(FormatLevel::Structured);
        model.add_reaction(
            ReactionBuilder::default()
                .id("PFK".to_string())
                .gpr(Some("(b3916 or b1723)".to_string()))
                .genes(Some(IndexSet::from([
                    "b3916".to_string(),
                    "b1723".to_string(),
                ])))
                .build()
                .unwrap(),
        );
        model.add_reaction(ReactionBuilder::default().id("ATPM".to_string()).build().unwrap());
        let ids: Vec<&str> = model
            .reactions_for_gene("b1723")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["PFK"]);
    }
}
