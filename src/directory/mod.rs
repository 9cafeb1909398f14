//! Contact directory.
//!
//! The directory validates incoming names, indexes each one in a
//! [`NiihauTrie`] under every word but the first plus the whole name, and
//! answers searches by crawling the trie below the query and ranking what it
//! finds with a [`LevenshteinRanker`].
//!
//! ```
//! use mauka_contacts_lib::directory::Directory;
//!
//! let mut directory = Directory::new();
//! directory.add("Jane Elizabeth Doe").unwrap();
//!
//! assert_eq!(directory.search("doe"), vec!["Jane Elizabeth Doe"]);
//! assert!(directory.search("smith").is_empty());
//! ```

mod shared;
mod validation;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::directory::DirectoryConfig;
use crate::data_structures::levenshtein_ranker::{LevenshteinRanker, RankedRecord, RankerOptions};
use crate::data_structures::niihau_trie::{NiihauTrie, NiihauTrieConfig};
use crate::error::directory::DirectoryError;
use crate::error::ContactsResult;

pub use shared::SharedDirectory;
pub use validation::validate_record;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that were indexed
    pub added: usize,

    /// Lines that failed validation
    pub rejected: usize,
}

/// Upper bound on how many chars lower-casing turns one char into.
///
/// Unicode full case mappings never yield more than three code points, so a
/// trie this deep holds every key of a record that passed the length check.
const MAX_LOWERCASE_EXPANSION: usize = 3;

/// In-memory contact directory.
#[derive(Debug)]
pub struct Directory {
    trie: NiihauTrie,
    ranker: LevenshteinRanker,
    config: DirectoryConfig,
    record_count: usize,
}

impl Directory {
    /// Creates an empty directory with default configuration.
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    /// Creates an empty directory with the given configuration.
    ///
    /// The configuration is used as given; call
    /// [`Validate::validate`](crate::config::Validate::validate) on it first
    /// when it comes from outside the program. A `max_record_length` of zero
    /// makes every record too long.
    pub fn with_config(config: DirectoryConfig) -> Self {
        let trie = NiihauTrie::with_config(NiihauTrieConfig {
            max_depth: config
                .max_record_length
                .saturating_mul(MAX_LOWERCASE_EXPANSION),
        });
        let ranker = LevenshteinRanker::with_options(
            RankerOptions::new().fold_case(config.fold_case_in_ranking),
        );

        Self {
            trie,
            ranker,
            config,
            record_count: 0,
        }
    }

    /// Adds a record to the directory.
    ///
    /// The record is trimmed and validated first, and its keys go into the
    /// index together or not at all; a rejected record leaves the directory
    /// untouched. Adding the same record twice stores it twice.
    pub fn add(&mut self, record: &str) -> DirectoryResult<()> {
        let record = record.trim();
        validate_record(record, self.config.max_record_length)?;

        self.trie.insert_all(index_keys(record), record)?;
        self.record_count += 1;

        debug!(record, "Record indexed");
        Ok(())
    }

    /// Returns every record indexed under a key starting with `prefix`,
    /// case-insensitively, in trie crawl order.
    pub fn prefix_lookup(&self, prefix: &str) -> Vec<String> {
        let candidates = self.trie.find_by_prefix(prefix);
        debug!(prefix, candidates = candidates.len(), "Prefix lookup");
        candidates
    }

    /// Finds records matching `query` as a prefix and ranks them by edit
    /// distance to `query`, closest first.
    pub fn search_ranked(&self, query: &str) -> Vec<RankedRecord> {
        let mut candidates = self.prefix_lookup(query);
        if self.config.dedup_results {
            let mut seen = HashSet::new();
            candidates.retain(|record| seen.insert(record.clone()));
        }
        self.ranker.rank(candidates, query)
    }

    /// Finds records matching `query`, ranked closest first.
    ///
    /// An empty result means nothing was found.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_ranked(query)
            .into_iter()
            .map(|ranked| ranked.record)
            .collect()
    }

    /// Adds one record per line of `reader`.
    ///
    /// Lines are trimmed and blank lines skipped. Lines that fail validation
    /// are counted and logged, and the load carries on.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> ContactsResult<LoadReport> {
        let mut report = LoadReport::default();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            let record = line.trim();
            if record.is_empty() {
                continue;
            }

            match self.add(record) {
                Ok(()) => report.added += 1,
                Err(e) if e.is_invalid_record() => {
                    warn!(line = line_number + 1, error = %e, "Skipping rejected record");
                    report.rejected += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(
            added = report.added,
            rejected = report.rejected,
            keys = self.trie.key_count(),
            "Bulk load finished"
        );
        Ok(report)
    }

    /// Adds one record per line of the file at `path`.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> ContactsResult<LoadReport> {
        let file = File::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Loading records");
        self.load_from_reader(BufReader::new(file))
    }

    /// Number of records added.
    pub fn len(&self) -> usize {
        self.record_count
    }

    /// Whether no record has been added.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Number of distinct keys in the index.
    pub fn key_count(&self) -> usize {
        self.trie.key_count()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

/// The keys a record is indexed under: every word except the first, then the
/// whole record, without repeats.
fn index_keys(record: &str) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for key in record.split_whitespace().skip(1).chain(std::iter::once(record)) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}
