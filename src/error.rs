//! Error handling for bulletin ingestion and wind aggregation.
//!
//! The text-processing core never fails: non-matching lines, reports and
//! tokens are filtered out. These errors cover the I/O glue around it,
//! configuration, and the worker fan-out.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input directory not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read bulletin file: {path}")]
    UnreadableBulletin {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory traversal failed: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid wind pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Worker failed: {reason}")]
    WorkerFailed { reason: String },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl WindsError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a worker failure error
    pub fn worker_failed(reason: impl Into<String>) -> Self {
        Self::WorkerFailed {
            reason: reason.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WindsError>;
