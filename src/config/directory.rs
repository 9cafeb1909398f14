//! Directory configuration module.
//!
//! This module defines the settings that shape how records are validated,
//! indexed and ranked by the contact directory.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Contact directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Maximum number of characters in a record
    pub max_record_length: usize,

    /// Whether ranking lower-cases record and query before measuring distance
    pub fold_case_in_ranking: bool,

    /// Whether repeated records are dropped from search results
    pub dedup_results: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            max_record_length: 50,
            fold_case_in_ranking: false,
            dedup_results: false,
        }
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_record_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "directory.max_record_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
