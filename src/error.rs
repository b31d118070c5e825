//! Errors surfaced by the validation command.

use thiserror::Error;

use crate::source::SourceError;

/// Failures raised while loading and checking a source from the command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// The source was rejected. Displays the underlying message unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The source document was not valid JSON for a [`Source`](crate::Source).
    #[error("invalid source JSON: {message}")]
    InvalidSource {
        /// Parser error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
