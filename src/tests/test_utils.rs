//! Test utilities and fixtures for Mauka Contacts.
//!
//! This module provides reusable proptest strategies for contact names and a
//! fixture that owns a temporary directory for config and names files.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum length of a contact name accepted by the default configuration.
pub const MAX_NAME_LENGTH: usize = 50;

/// Generate a strategy for a single capitalized word of ASCII letters.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[A-Z][a-z]{0,9}".boxed()
}

/// Generate a strategy for valid contact names.
///
/// Names are one to four words joined by single spaces and never exceed
/// [`MAX_NAME_LENGTH`] characters.
pub fn name_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(word_strategy(), 1..=4)
        .prop_map(|words| words.join(" "))
        .prop_filter("Name too long", |name| name.chars().count() <= MAX_NAME_LENGTH)
        .boxed()
}

/// Test fixture for tests that need files on disk.
///
/// This struct keeps the temporary directory alive for the duration of a test
/// and removes environment variables it set when dropped.
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
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file into the fixture directory.
    ///
    /// # Parameters
    ///
    /// * `name` - File name, including extension.
    /// * `contents` - The contents to write to the file.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a newline-delimited names file into the fixture directory.
    pub fn create_names_file(&self, names: &[&str]) -> std::io::Result<PathBuf> {
        self.create_file("names.txt", names.join("\n"))
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        // Clean up any environment variables we set
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
