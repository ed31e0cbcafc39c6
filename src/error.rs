//! Error types for suggest-export
//!
//! One error enum covers the whole pipeline: argument handling, the HTTP
//! fetch, response parsing, and the file write. Each variant carries enough
//! context to produce a useful log line, and [`Error::exit_code`] maps
//! variants to process exit codes for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for suggest-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for suggest-export
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of command-line arguments
    #[error("wrong number of arguments: expected {expected}, got {actual}")]
    Arguments {
        /// How many positional arguments the CLI expects
        expected: usize,
        /// How many were actually supplied
        actual: usize,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "timeout_secs")
        key: Option<String>,
    },

    /// Connection error — the request could not be sent or completed
    #[error("connection error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP error {status} fetching {url}")]
    Status {
        /// The HTTP status code returned by the server
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body was not the expected JSON array
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("failed to serialize CSV: {0}")]
    Csv(String),

    /// Writing the output file failed
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// The output path that could not be written
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code for this error
    ///
    /// Usage and configuration errors exit with 2 (conventional for CLI
    /// misuse); everything else exits with 1. Success is exit 0 and never
    /// reaches this mapping.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Arguments { .. } => 2,
            Error::Config { .. } => 2,
            Error::Network(_)
            | Error::Status { .. }
            | Error::Parse(_)
            | Error::Csv(_)
            | Error::FileWrite { .. } => 1,
        }
    }
}
