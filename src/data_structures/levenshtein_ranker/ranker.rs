// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Candidate ranking by edit distance.

use serde::Serialize;

use super::distance::distance;

/// Options for configuring the ranker behavior.
#[derive(Debug, Clone, Default)]
pub struct RankerOptions {
    /// Whether to lower-case both record and query before measuring distance
    pub fold_case: bool,
}

impl RankerOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether distances should ignore letter case.
    ///
    /// # Arguments
    ///
    /// * `value` - `true` to compare lower-cased strings, `false` to compare them as given.
    ///
    /// # Returns
    ///
    /// Updated options object with the specified setting.
    pub fn fold_case(mut self, value: bool) -> Self {
        self.fold_case = value;
        self
    }
}

/// A record paired with its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRecord {
    /// The record, with its original casing
    pub record: String,

    /// Edit distance between the record and the query
    pub distance: usize,
}

/// Orders candidate records from most to least similar to a query.
#[derive(Debug, Clone, Default)]
pub struct LevenshteinRanker {
    options: RankerOptions,
}

impl LevenshteinRanker {
    /// Creates a ranker that compares records and query exactly as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ranker with the given options.
    pub fn with_options(options: RankerOptions) -> Self {
        Self { options }
    }

    /// Measures the distance between one record and the query.
    pub fn score(&self, record: &str, query: &str) -> usize {
        if self.options.fold_case {
            distance(&record.to_lowercase(), &query.to_lowercase())
        } else {
            distance(record, query)
        }
    }

    /// Scores every record and sorts ascending by distance.
    ///
    /// The sort is stable: records at equal distance keep the order they were
    /// given in.
    pub fn rank<I>(&self, records: I, query: &str) -> Vec<RankedRecord>
    where
        I: IntoIterator<Item = String>,
    {
        let mut ranked: Vec<RankedRecord> = records
            .into_iter()
            .map(|record| {
                let distance = self.score(&record, query);
                RankedRecord { record, distance }
            })
            .collect();

        ranked.sort_by_key(|candidate| candidate.distance);
        ranked
    }
}
