// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the route trie.

use super::error::{RouteTrieError, RouteTrieResult};

/// Syntax and limits of a [`RouteTrie`](super::RouteTrie).
///
/// The delimiter splits paths into segments. A segment starting with the
/// parameter marker declares a named parameter (`:id`, or `:id:[0-9]+` with a
/// constraint), and a segment made of the wildcard marker alone captures the
/// rest of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTrieConfig {
    /// Character separating path segments
    pub delimiter: char,

    /// Character introducing a named parameter segment
    pub parameter_marker: char,

    /// Character forming a wildcard segment
    pub wildcard_marker: char,

    /// Maximum number of segments in a route or matched path
    pub max_depth: usize,
}

impl RouteTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - delimiter: `/`
    /// - parameter_marker: `:`
    /// - wildcard_marker: `*`
    /// - max_depth: 64
    pub fn new() -> Self {
        Self {
            delimiter: '/',
            parameter_marker: ':',
            wildcard_marker: '*',
            max_depth: 64,
        }
    }

    /// Set the segment delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the parameter marker.
    pub fn with_parameter_marker(mut self, marker: char) -> Self {
        self.parameter_marker = marker;
        self
    }

    /// Set the wildcard marker.
    pub fn with_wildcard_marker(mut self, marker: char) -> Self {
        self.wildcard_marker = marker;
        self
    }

    /// Set the maximum number of segments per path.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks that the three syntax characters are distinct and the depth is usable.
    pub fn validate(&self) -> RouteTrieResult<()> {
        if self.delimiter == self.parameter_marker {
            return Err(RouteTrieError::InvalidConfig(format!(
                "delimiter and parameter marker are both '{}'",
                self.delimiter
            )));
        }
        if self.delimiter == self.wildcard_marker {
            return Err(RouteTrieError::InvalidConfig(format!(
                "delimiter and wildcard marker are both '{}'",
                self.delimiter
            )));
        }
        if self.parameter_marker == self.wildcard_marker {
            return Err(RouteTrieError::InvalidConfig(format!(
                "parameter marker and wildcard marker are both '{}'",
                self.parameter_marker
            )));
        }
        if self.max_depth == 0 {
            return Err(RouteTrieError::InvalidConfig(
                "max_depth must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RouteTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
