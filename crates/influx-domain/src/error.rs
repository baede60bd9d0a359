//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Influx
///
/// Validation violations and dependency cycles are *not* errors: they are
/// normal pass outcomes reported through the diagnostic sink. This type covers
/// collaborator failures (scanning, emitting, configuration) and internal
/// defects.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {source}")]
    Toml {
        /// The underlying TOML error
        #[from]
        source: toml::de::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A declaration document could not be read or understood
    #[error("Scan error in {}: {message}", path.display())]
    Scan {
        /// Document that failed to scan
        path: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// Artifact emission failed
    #[error("Emit error: {message}")]
    Emit {
        /// Description of the emission failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal invariant violation (a programming defect, never user input)
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the broken invariant
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a scan error for a declaration document
    pub fn scan<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Scan {
            path: path.into(),
            message: message.into(),
        }
    }
}

// I/O and emission error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an emission error
    pub fn emit<S: Into<String>>(message: S) -> Self {
        Self::Emit {
            message: message.into(),
            source: None,
        }
    }

    /// Create an emission error with source
    pub fn emit_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Emit {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error signals a programming defect rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
