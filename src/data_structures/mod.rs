//! Data structures for the Ala router.
//!
//! The route trie is the core of the crate; everything else configures or
//! drives it.

pub mod route_trie;

// Re-export common data structures
pub use route_trie::{RouteTrie, RouteTrieConfig, RouteTrieError, RouteTrieResult, SyncRouteTrie};
