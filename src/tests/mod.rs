//! Test modules for the Ala router.
//!
//! Crate-level tests that span components live here; unit tests stay next
//! to the code they cover.

pub mod config_tests;
pub mod error_tests;
pub mod test_utils;

pub use test_utils::{
    create_test_dir, literal_path_set_strategy, literal_path_strategy, literal_segment_strategy,
    TestFixture,
};
