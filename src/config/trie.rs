//! Route trie configuration module.
//!
//! This module defines the path syntax used when building the route trie
//! and the route table loaded into it.

use super::{ConfigResult, Validate};
use crate::data_structures::route_trie::RouteTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Path syntax and limits of the route trie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrieSettings {
    /// Segment delimiter (a single character)
    pub delimiter: String,

    /// Marker introducing a named parameter (a single character)
    pub parameter_marker: String,

    /// Marker forming a wildcard segment (a single character)
    pub wildcard_marker: String,

    /// Maximum number of segments per path
    pub max_depth: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        let defaults = RouteTrieConfig::default();
        Self {
            delimiter: defaults.delimiter.to_string(),
            parameter_marker: defaults.parameter_marker.to_string(),
            wildcard_marker: defaults.wildcard_marker.to_string(),
            max_depth: defaults.max_depth,
        }
    }
}

/// Extracts the only character of a setting.
fn single_char(key: &str, value: &str) -> ConfigResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::ValidationError(format!(
            "{key} must be exactly one character, got {value:?}"
        ))),
    }
}

impl TrieSettings {
    /// Converts the settings into a validated [`RouteTrieConfig`].
    pub fn to_trie_config(&self) -> ConfigResult<RouteTrieConfig> {
        let config = RouteTrieConfig::new()
            .with_delimiter(single_char("trie.delimiter", &self.delimiter)?)
            .with_parameter_marker(single_char("trie.parameter_marker", &self.parameter_marker)?)
            .with_wildcard_marker(single_char("trie.wildcard_marker", &self.wildcard_marker)?)
            .with_max_depth(self.max_depth);
        config
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(config)
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        self.to_trie_config().map(|_| ())
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Route pattern, e.g. `/user/:id`
    pub path: String,

    /// Name reported when the route matches
    pub target: String,
}

impl Validate for RouteEntry {
    fn validate(&self) -> ConfigResult<()> {
        if self.target.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "route {:?} has an empty target",
                self.path
            )));
        }
        Ok(())
    }
}
