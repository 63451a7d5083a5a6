//! Error types for the artscan pipeline.
//!
//! Only the root-path condition is fatal to a run. Per-file decode failures
//! never surface here at all: they are carried as data on
//! [`Measurement::Degraded`](crate::pipeline::Measurement).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for artscan operations.
#[derive(Error, Debug)]
pub enum ArtscanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Directory scan errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised by directory traversal.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Root path does not exist or is not a directory. Fatal: the run
    /// aborts before any extraction begins.
    #[error("Scan root not found or not a directory: {0:?}")]
    PathNotFound(PathBuf),
}

/// Per-file measurement errors.
///
/// `Unreadable` is recovered by omission: the record is dropped from the
/// collection and the path is logged. Decode failures are not errors — they
/// degrade the record instead.
#[derive(Error, Debug)]
pub enum MeasureError {
    /// File vanished or became inaccessible between discovery and
    /// size measurement.
    #[error("File unreadable: {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias for artscan results.
pub type Result<T> = std::result::Result<T, ArtscanError>;
