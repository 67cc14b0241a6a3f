//! Journey simulation error types
//!
//! Only catalog construction and configuration loading can fail. Running a
//! simulation never returns an error: unknown personas fall back to the
//! catalog default and day counts are clamped.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from catalog construction and configuration loading.
#[derive(Debug, Error)]
pub enum JourneyError {
    /// A persona probability is outside `[0, 1]` or not finite.
    #[error("persona {persona}: {field} must be within [0, 1], got {value}")]
    InvalidProbability {
        /// Persona key
        persona: String,
        /// Name of the offending field
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Two personas share the same key.
    #[error("duplicate persona key: {0}")]
    DuplicatePersona(String),

    /// The designated default persona is not part of the catalog.
    #[error("default persona {0} is not in the catalog")]
    MissingDefaultPersona(String),

    /// A catalog must contain at least one persona.
    #[error("persona catalog is empty")]
    EmptyCatalog,

    /// Configuration values are inconsistent.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the problem
        message: String,
    },

    /// TOML input could not be parsed.
    #[error("failed to parse TOML")]
    Parse {
        /// Underlying parser error
        #[source]
        source: toml::de::Error,
    },

    /// A configuration or catalog file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl JourneyError {
    /// Create an invalid probability error.
    pub fn invalid_probability(persona: impl Into<String>, field: &'static str, value: f64) -> Self {
        Self::InvalidProbability {
            persona: persona.into(),
            field,
            value,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an I/O error tied to a file path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for JourneyError {
    fn from(source: toml::de::Error) -> Self {
        Self::Parse { source }
    }
}

/// Result alias for fallible journey operations.
pub type Result<T> = std::result::Result<T, JourneyError>;
