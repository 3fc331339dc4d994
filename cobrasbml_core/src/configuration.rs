use std::sync::{LazyLock, PoisonError, RwLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::io::sbml::SbmlError;

/// Process wide default configuration, used by [`crate::metabolic_model::model::Model::read_sbml`]
pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

/// Options controlling how reaction notes and gene associations are read from SBML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Pattern used to find the subsystem in a reaction's notes
    ///
    /// If the pattern has a group named `value`, that group is the subsystem, otherwise the
    /// whole match is used.
    pub subsystem_pattern: String,
    /// Pattern used to find the gene association in a reaction's notes (level 2 documents)
    pub gpr_pattern: String,
    /// Pattern used to split a GPR string into gene identifiers
    pub gene_split_pattern: String,
    /// Prefix removed from gene product references in level 3 documents
    pub gene_prefix: String,
    /// Drop every `and` group from level 3 gene associations rather than including it in the
    /// GPR string, including an `and` directly under `fbc:geneProductAssociation` (which then
    /// leaves the reaction without a GPR). Only useful for reproducing output of older tools.
    pub drop_and_groups: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            subsystem_pattern: r"SUBSYSTEM: *(?P<value>.*\S+.*) *</".to_string(),
            gpr_pattern: r"GENE_ASSOCIATION: *(?P<value>.*\S+.*) *</".to_string(),
            gene_split_pattern: r" or | and |[() ]".to_string(),
            gene_prefix: "G_".to_string(),
            drop_and_groups: false,
        }
    }
}

impl Configuration {
    /// Get a copy of the current process wide configuration
    pub fn global() -> Configuration {
        CONFIGURATION
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Compile the configured patterns
    ///
    /// # Errors
    /// Returns [`SbmlError::InvalidPattern`] if any of the patterns is not a valid regex.
    pub fn compile(&self) -> Result<NotePatterns, SbmlError> {
        Ok(NotePatterns {
            subsystem: Regex::new(&self.subsystem_pattern)?,
            gpr: Regex::new(&self.gpr_pattern)?,
            gene_split: Regex::new(&self.gene_split_pattern)?,
            gene_prefix: self.gene_prefix.clone(),
            drop_and_groups: self.drop_and_groups,
        })
    }
}

/// Compiled form of a [`Configuration`]
#[derive(Clone, Debug)]
pub struct NotePatterns {
    pub subsystem: Regex,
    pub gpr: Regex,
    pub gene_split: Regex,
    pub gene_prefix: String,
    pub drop_and_groups: bool,
}

impl NotePatterns {
    /// Search `text` with `pattern`, returning the `value` group if the pattern has one,
    /// otherwise the whole match
    pub(crate) fn capture(pattern: &Regex, text: &str) -> Option<String> {
        let caps = pattern.captures(text)?;
        caps.name("value")
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().to_string())
    }

    /// Split a GPR string into its gene identifiers, dropping empty tokens
    pub fn split_genes(&self, gpr: &str) -> indexmap::IndexSet<String> {
        self.gene_split
            .split(gpr)
            .filter(|token| !token.is_empty())
            .map(|token| token.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_compile() {
        let patterns = Configuration::default().compile().unwrap();
        let genes = patterns.split_genes("(b0001 or b0002) and b0003");
        let expected: Vec<&str> = vec!["b0001", "b0002", "b0003"];
        assert_eq!(genes.iter().map(|g| g.as_str()).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn invalid_pattern() {
        let config = Configuration {
            gene_split_pattern: "(unclosed".to_string(),
            ..Configuration::default()
        };
        match config.compile() {
            Err(SbmlError::InvalidPattern(_)) => {}
            other => panic!("Expected an invalid pattern error, got {:?}", other),
        }
    }

    #[test]
    fn capture_without_value_group() {
        let pattern = Regex::new(r"b\d+").unwrap();
        assert_eq!(
            NotePatterns::capture(&pattern, "<p>gene b0123</p>"),
            Some("b0123".to_string())
        );
        assert_eq!(NotePatterns::capture(&pattern, "<p>none</p>"), None);
    }

    #[test]
    fn partial_json_configuration() {
        let config: Configuration =
            serde_json::from_str(r#"{"gene_prefix": "", "drop_and_groups": true}"#)
                .unwrap();
        assert_eq!(config.gene_prefix, "");
        assert!(config.drop_and_groups);
        assert_eq!(
            config.gene_split_pattern,
            Configuration::default().gene_split_pattern
        );
    }
}
