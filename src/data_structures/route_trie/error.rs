// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the route trie.
//!
//! A failed match is not an error: `matches` returns `false` and `lookup`
//! returns `None`. Everything here is a local, recoverable condition.

/// Errors that can occur in route trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTrieError {
    /// The terminal node of the route already carries data.
    #[error("Route already exists: {0}")]
    RouteAlreadyExists(String),

    /// The route's token sequence does not exist or carries no data.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The route could not be tokenized into a valid segment sequence.
    #[error("Malformed route '{path}': {reason}")]
    MalformedPath {
        /// The offending route.
        path: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A parameter constraint could not be compiled.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern text.
        pattern: String,
        /// Compiler message.
        reason: String,
    },

    /// The route has more segments than the trie allows.
    #[error("Route '{path}' exceeds maximum trie depth of {max_depth}")]
    PathTooDeep {
        /// The route that was too deep.
        path: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// The trie configuration is not usable.
    #[error("Invalid trie configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for route trie operations.
pub type RouteTrieResult<T> = Result<T, RouteTrieError>;
