//! Test utilities and fixtures for the Ala router.
//!
//! This module provides reusable proptest strategies for path segments and
//! routes, plus a fixture for tests that need configuration files on disk.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum number of segments in generated paths.
const MAX_SEGMENTS: usize = 6;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Strategy for literal segments that never collide with route syntax.
pub fn literal_segment_strategy() -> BoxedStrategy<String> {
    prop::string::string_regex("[a-z0-9_-]{1,8}")
        .expect("valid segment regex")
        .boxed()
}

/// Strategy for literal-only paths with a leading delimiter.
pub fn literal_path_strategy() -> BoxedStrategy<String> {
    prop::collection::vec(literal_segment_strategy(), 1..=MAX_SEGMENTS)
        .prop_map(|segments| format!("/{}", segments.join("/")))
        .boxed()
}

/// Strategy for sets of distinct literal paths.
pub fn literal_path_set_strategy(max_paths: usize) -> BoxedStrategy<Vec<String>> {
    prop::collection::hash_set(literal_path_strategy(), 1..=max_paths)
        .prop_map(|paths| paths.into_iter().collect())
        .boxed()
}

/// Test fixture for tests requiring files on disk.
///
/// Environment variables set through the fixture are removed when it is dropped.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
