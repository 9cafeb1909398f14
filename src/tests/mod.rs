//! Test modules for Mauka Contacts.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Directory behavior, including property-based tests using proptest
//! - The interactive session driven through in-memory I/O
//! - Test fixtures and utilities

pub mod config_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{name_strategy, word_strategy, TestFixture};
