//! Errors raised while loading the contacts configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Why a contacts configuration could not be loaded or used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `--config` named a file that does not exist.
    #[error("Config file {0} does not exist")]
    FileNotFound(PathBuf),

    /// The file extension maps to no supported format (toml, json, yaml).
    #[error("Config file {0} is not toml, json or yaml")]
    UnsupportedFormat(PathBuf),

    /// A source could not be read or deserialized into the settings.
    #[error("Could not read configuration: {0}")]
    ParseError(String),

    /// `log.level` names no tracing level.
    #[error("Unknown log level '{0}', expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A directory setting is outside the range the directory can work with.
    #[error("Setting {key} {message}")]
    ValueOutOfRange {
        /// Dotted name of the setting
        key: String,
        /// What the value has to satisfy
        message: String,
    },

    /// The process-wide settings were read before they were installed.
    #[error("Global configuration has not been initialized")]
    NotInitialized,
}
