//! This module provides the Compartment struct representing a cellular compartment

use serde::{Deserialize, Serialize};

/// Represents a compartment of the model (e.g. cytosol, extracellular space)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compartment {
    /// Used to identify the compartment (must be unique)
    pub id: String,
    /// Human readable name of the compartment
    pub name: Option<String>,
    /// Id of the compartment enclosing this one
    pub outside: Option<String>,
}

impl Compartment {
    pub fn new(id: String, name: Option<String>, outside: Option<String>) -> Compartment {
        Compartment { id, name, outside }
    }
}
