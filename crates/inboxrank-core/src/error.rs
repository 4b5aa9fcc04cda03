//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur while building a classifier.
///
/// Classification itself is total; only loading and validating the
/// configuration tables can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration table contains an unusable entry.
    #[error("Invalid table `{table}`: {reason}")]
    InvalidTable {
        /// Name of the offending table.
        table: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
