//! Module providing SBML input for cobrasbml Models
//!
//! Compartments, species and reactions are read from the `<model>` element of an SBML
//! document. Problems with individual entries (a reaction referencing a species that doesn't
//! exist, a species with an unreadable charge) are logged with [`tracing`] and skipped, only
//! an unreadable document is an error.
use std::fs;
use std::path::Path;

use roxmltree::Node;
use thiserror::Error;
use tracing::{debug, warn};

use crate::configuration::{Configuration, NotePatterns};
use crate::metabolic_model::compartment::Compartment;
use crate::metabolic_model::model::Model;
use crate::metabolic_model::reaction::ReactionBuilderError;
use crate::metabolic_model::species::{SpeciesBuilder, SpeciesBuilderError};

pub mod gene_association;
pub mod locate;
pub mod reaction;
pub mod species_ref;

pub use gene_association::FormatLevel;
use locate::{attribute, find_all, find_first};

impl Model {
    /// Read an SBML file using the process wide [`crate::configuration::CONFIGURATION`]
    pub fn read_sbml<P: AsRef<Path>>(path: P) -> Result<Model, SbmlError> {
        Model::read_sbml_with(path, &Configuration::global())
    }

    /// Read an SBML file using `configuration`
    pub fn read_sbml_with<P: AsRef<Path>>(
        path: P,
        configuration: &Configuration,
    ) -> Result<Model, SbmlError> {
        let model_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(SbmlError::UnableToRead(format!("{:?}", err))),
        };
        Model::from_sbml_str(&model_str, configuration)
    }

    /// Read a Model from an SBML string
    pub fn from_sbml_str(
        model_str: &str,
        configuration: &Configuration,
    ) -> Result<Model, SbmlError> {
        Model::from_sbml_str_with_warnings(model_str, configuration, &mut Vec::new())
    }

    /// The same as [`Model::from_sbml_str`], but also collects the warnings generated while
    /// reading into `warnings`
    ///
    /// # Errors
    /// Fails if one of the configured patterns is invalid, the document is not valid XML, or
    /// the document has no `<model>` element.
    pub fn from_sbml_str_with_warnings(
        model_str: &str,
        configuration: &Configuration,
        warnings: &mut Vec<String>,
    ) -> Result<Model, SbmlError> {
        let patterns = configuration.compile()?;
        let document = roxmltree::Document::parse(model_str)?;
        let sbml = document.root_element();
        let level = read_level(sbml, warnings);
        let model_node = sbml
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == "model")
            .ok_or(SbmlError::MissingModel)?;

        let mut model = Model::new_empty(level);
        model.id = attribute(model_node, "id").map(|s| s.to_string());
        model.name = attribute(model_node, "name").map(|s| s.to_string());
        read_compartments(&mut model, find_first(model_node, "listOfCompartments"));
        read_species(&mut model, find_first(model_node, "listOfSpecies"), warnings)?;
        read_reactions(
            &mut model,
            find_first(model_node, "listOfReactions"),
            &patterns,
            warnings,
        )?;
        debug!(
            "Read {} compartments, {} species and {} reactions",
            model.compartments.len(),
            model.species.len(),
            model.reactions.len()
        );
        Ok(model)
    }
}

/// Determine the [`FormatLevel`] from the `level` attribute of the `<sbml>` element
fn read_level(sbml: Node, warnings: &mut Vec<String>) -> FormatLevel {
    match attribute(sbml, "level").map(|l| l.trim().parse::<u32>()) {
        Some(Ok(level)) => FormatLevel::from_level(level),
        Some(Err(_)) | None => {
            let message = format!(
                "Unable to determine SBML level ({:?}), assuming level 3.",
                attribute(sbml, "level")
            );
            warn!("{}", message);
            warnings.push(message);
            FormatLevel::Structured
        }
    }
}

fn read_compartments(model: &mut Model, list: Option<Node>) {
    let Some(list) = list else {
        return;
    };
    for elem in find_all(list, "compartment") {
        model.add_compartment(Compartment::new(
            attribute(elem, "id").unwrap_or_default().to_string(),
            attribute(elem, "name").map(|s| s.to_string()),
            attribute(elem, "outside").map(|s| s.to_string()),
        ));
    }
}

fn read_species(
    model: &mut Model,
    list: Option<Node>,
    warnings: &mut Vec<String>,
) -> Result<(), SbmlError> {
    let Some(list) = list else {
        return Ok(());
    };
    for sp in find_all(list, "species") {
        let id = attribute(sp, "id").unwrap_or_default();
        let charge = match attribute(sp, "charge").map(|c| c.trim().parse::<i32>()) {
            Some(Ok(charge)) => Some(charge),
            Some(Err(_)) => {
                let message = format!("Species {} has an invalid charge.", id);
                warn!("{}", message);
                warnings.push(message);
                None
            }
            None => None,
        };
        model.add_species(
            SpeciesBuilder::default()
                .id(id.to_string())
                .name(attribute(sp, "name").map(|s| s.to_string()))
                .compartment(attribute(sp, "compartment").map(|s| s.to_string()))
                .charge(charge)
                .formula(attribute(sp, "chemicalFormula").map(|s| s.to_string()))
                .build()?,
        );
    }
    Ok(())
}

/// Read reactions, resolving their species against those already added to `model`
fn read_reactions(
    model: &mut Model,
    list: Option<Node>,
    patterns: &NotePatterns,
    warnings: &mut Vec<String>,
) -> Result<(), SbmlError> {
    let Some(list) = list else {
        return Ok(());
    };
    for rxn in find_all(list, "reaction") {
        let parsed =
            reaction::read_reaction(rxn, model.level, &model.species, patterns, warnings)?;
        model.add_reaction(parsed);
    }
    Ok(())
}

#[derive(Error, Debug)]
pub enum SbmlError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse xml")]
    XmlError(#[from] roxmltree::Error),
    #[error("Document does not contain a model element")]
    MissingModel,
    #[error("Invalid pattern in configuration")]
    InvalidPattern(#[from] regex::Error),
    #[error("Unable to build species")]
    UnableToBuildSpecies(#[from] SpeciesBuilderError),
    #[error("Unable to build reaction")]
    UnableToBuildReaction(#[from] ReactionBuilderError),
}
