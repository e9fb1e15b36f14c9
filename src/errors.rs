//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur during a comparison run, offering more context than generic I/O
//! or `anyhow` errors. Per-file read failures are deliberately *not* part of
//! this enum: they are captured inside `ProcessResult` so that one bad file
//! never aborts a whole strategy run.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categorized errors surfaced by the benchmark harness.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring while creating or writing the workspace or its log.
    /// Fatal to the whole comparison run.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Generic error related to invalid configuration settings or combinations.
    /// Often used when validation fails after initial parsing.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A strategy's scheduling mechanism itself failed to come up (e.g., the
    /// worker pool could not be created). Fatal to that strategy's report
    /// only; the remaining strategies still run.
    #[error("{strategy} strategy failed to start: {reason}")]
    Strategy {
        /// Name of the strategy whose scheduler failed.
        strategy: &'static str,
        /// Human-readable cause.
        reason: String,
    },

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
