//! Error types for scanning and report rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a scan from starting.
///
/// Per-file failures during the walk are never surfaced here; those files
/// are left out of the tally.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Path {} does not exist.", path.display())]
    RootNotFound { path: PathBuf },
}

impl ScanError {
    /// The root path the scan was asked to walk.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootNotFound { path } => path,
        }
    }
}

/// Errors raised while writing a report to one of the sinks.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
