//! Directory error module.
//!
//! This module defines the ways a record can be refused by the contact directory.

use crate::data_structures::niihau_trie::NiihauTrieError;
use thiserror::Error;

/// Errors that can occur while adding records to the directory.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    /// The record is empty once surrounding whitespace is removed.
    #[error("Record is empty")]
    EmptyRecord,

    /// The record has more characters than the configured limit.
    #[error("Record has {length} characters, the limit is {max_length}")]
    RecordTooLong {
        /// Number of characters in the trimmed record
        length: usize,
        /// The configured limit
        max_length: usize,
    },

    /// The record contains something other than letters and whitespace.
    #[error("Record '{0}' may only contain letters and whitespace")]
    InvalidCharacters(String),

    /// The trie refused one of the record's keys.
    #[error("Index error: {0}")]
    Index(#[from] NiihauTrieError),
}

impl DirectoryError {
    /// Whether this error is a validation rejection of the record itself.
    pub fn is_invalid_record(&self) -> bool {
        !matches!(self, Self::Index(_))
    }
}
