// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Levenshtein Ranker for ordering search candidates.
//!
//! This module scores candidate records by their Levenshtein edit distance to a
//! query and returns them from closest to farthest. It has no knowledge of
//! where the candidates came from.
//!
//! # Example
//!
//! ```
//! use mauka_contacts_lib::data_structures::levenshtein_ranker::{distance, LevenshteinRanker};
//!
//! assert_eq!(distance("kitten", "sitting"), 3);
//!
//! let ranker = LevenshteinRanker::new();
//! let ranked = ranker.rank(vec!["Jonas".to_string(), "John".to_string()], "John");
//! assert_eq!(ranked[0].record, "John");
//! assert_eq!(ranked[0].distance, 0);
//! ```
//!
//! # Performance Characteristics
//!
//! - Distance: O(|a| * |b|) time, O(|b|) space
//! - Ranking n candidates: n distance computations plus an O(n log n) stable sort

mod distance;
mod ranker;

#[cfg(test)]
mod tests;

// Re-exports
pub use distance::distance;
pub use ranker::{LevenshteinRanker, RankedRecord, RankerOptions};
