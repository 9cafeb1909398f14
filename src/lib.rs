//! Mauka Contacts Library
//!
//! This library contains the core components of Mauka Contacts: an in-memory
//! contact directory indexed by a prefix trie, an edit-distance ranker that
//! orders search hits, and the configuration, error and session layers built
//! around them. The library is used by the `mauka_contacts` binary, but can
//! also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`] stores records under lower-cased keys
//! - [`data_structures::levenshtein_ranker`] orders candidates by edit distance
//! - [`directory`] validates records, picks their keys and composes lookup with ranking
//! - [`session`] is the interactive menu loop over any reader and writer

pub mod config;
pub mod data_structures;
pub mod directory;
pub mod error;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Contacts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
