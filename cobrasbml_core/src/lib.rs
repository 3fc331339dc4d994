//! Reading genome scale metabolic models from SBML documents.
//!
//! Compartments, species and reactions (with their gene protein reaction rules) are read into
//! a [`metabolic_model::model::Model`], see [`io::sbml`] for details.

pub mod configuration;
pub mod io;
pub mod metabolic_model;
