//! Error handling for NodeBench
//!
//! Provides error types for the layers of the shell:
//! - Export errors (snapshot rasterization and file writing)
//! - Catalog errors (samples directory listing)
//! - Config errors (settings load/save/validation)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Export and catalog failures are absorbed and reported at the point of
//! occurrence; nothing here propagates past the shell boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot export error type
///
/// Any I/O or encode failure during a snapshot export collapses into
/// `WriteFailed`. The export is abandoned for that request and the shell
/// keeps running.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing or encoding the snapshot failed
    #[error("Failed to save the workspace as an image to {path}: {reason}")]
    WriteFailed {
        /// Destination path of the failed export.
        path: PathBuf,
        /// Underlying I/O or encoder message.
        reason: String,
    },
}

/// Samples catalog error type
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The samples directory could not be read
    #[error("Failed to read samples directory {path}: {source}")]
    DirectoryUnreadable {
        /// The directory that failed to list.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("Config I/O error at {path}: {source}")]
    Io {
        /// The config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file could not be parsed or serialized
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A config value failed validation
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid {
        /// The offending field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Top-level error type for NodeBench
#[derive(Error, Debug)]
pub enum Error {
    /// Snapshot export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Samples catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Result type alias used throughout NodeBench
pub type Result<T> = std::result::Result<T, Error>;
