//! Ala Router Library
//!
//! This library contains the route trie and the supporting configuration,
//! error handling and route table loading used by the `ala_router` binary.
//! The library can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::route_trie`] indexes delimiter-tokenized paths for
//!   exact, parameterized and wildcard matching.
//! - [`config`] loads the trie syntax, logging settings and route table from
//!   files and environment variables.
//! - [`router`] builds a trie from a loaded configuration.
//! - [`error`] defines the crate-wide error type and error reporting.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod router;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Ala router.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
