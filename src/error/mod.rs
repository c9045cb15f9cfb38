//! Error handling for the hospital trend report.
//!
//! Errors fall into three groups: input errors (bad periods or prompt answers),
//! data errors that could not be degraded gracefully, and I/O errors on the
//! persisted tables or the admissions database.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for report operations
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Malformed reporting period or prompt answer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The interactive prompt ran out of attempts
    #[error("No valid reporting month after {attempts} attempts")]
    PromptExhausted {
        /// Number of answers that were rejected
        attempts: usize,
    },

    /// Error opening, reading or writing a file
    #[error("IO error on {}: {context}: {source}", path.display())]
    Io {
        /// File the operation targeted
        path: PathBuf,
        /// What the file was needed for
        context: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Error reading from the terminal
    #[error("Terminal IO error: {0}")]
    Terminal(#[from] io::Error),

    /// Error parsing or writing a CSV table
    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        /// Table file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: csv::Error,
    },

    /// Error querying the admissions database
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Error parsing the configuration file
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReportError {
    /// Create an input error from any displayable message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an IO error tied to a path
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source,
        }
    }

    /// Create a CSV error tied to a path
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from operator input rather than data or files
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::PromptExhausted { .. })
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
