//! This module provides the species struct representing a metabolite

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Represents a chemical species (metabolite)
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Used to identify the species (must be unique)
    pub id: String,
    /// Human Readable name of the species
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Which compartment the species is in
    #[builder(default = "None")]
    pub compartment: Option<String>,
    /// Electrical charge of the species
    #[builder(default = "None")]
    pub charge: Option<i32>,
    /// Chemical Formula of the species
    #[builder(default = "None")]
    pub formula: Option<String>,
}
