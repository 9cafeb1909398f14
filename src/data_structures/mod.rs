//! Data structures for Mauka Contacts.
//!
//! This module contains the indexing and ranking structures behind the
//! contact directory. Both are plain single-owner types; sharing across
//! threads is left to the caller.

pub mod levenshtein_ranker;
pub mod niihau_trie;

// Re-export common data structures
pub use levenshtein_ranker::{LevenshteinRanker, RankedRecord};
pub use niihau_trie::{NiihauTrie, NiihauTrieError, NiihauTrieResult};
