//! Error types exposed by the configuration and terminal layers.
//!
//! The rating widget itself never fails; these errors only come from the
//! plumbing around it.

use thiserror::Error;

/// Errors surfaced while configuring or running the rating editor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookrateError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The configured star is not one of the star slots.
    #[error("star must be between 1 and {max}, got {star}")]
    InvalidStar {
        /// The configured one-based star.
        star: u8,
        /// Number of star slots.
        max: usize,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI failed to start or run.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail from the TUI framework.
        message: String,
    },
}
