//! Errors raised while resolving settings.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where a raw setting value was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A process environment variable, with the key as it was spelled.
    Environment { key: String },
    /// A line of the local override file.
    OverrideFile { path: PathBuf },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Environment { key } => write!(f, "environment variable {}", key),
            Origin::OverrideFile { path } => write!(f, "override file {}", path.display()),
        }
    }
}

/// Errors that can occur while loading or installing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value could not be coerced to its field's declared type.
    #[error("Invalid value for {field} (from {origin}): expected {expected}, got {value:?}")]
    InvalidValue {
        field: &'static str,
        origin: Origin,
        expected: &'static str,
        value: String,
    },

    /// The override file exists but could not be read.
    #[error("Failed to read override file {}: {source}", .path.display())]
    OverrideFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// Settings were already installed for this process.
    #[error("Settings have already been initialized for this process")]
    AlreadyInitialized,
}

impl ConfigError {
    /// Name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidValue { field, .. } => Some(*field),
            _ => None,
        }
    }
}
