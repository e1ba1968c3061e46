//! Error handling for trip aggregation runs.
//!
//! Only failures that abort a run (or a single report write) live here.
//! Row-level problems are not errors: they surface as
//! [`ParseFailure`](crate::models::ParseFailure) values and the run continues.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Required column '{column}' not found in input header")]
    MissingColumn { column: String },

    #[error("Input file not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to persist report to {path}: {reason}")]
    Persist { path: PathBuf, reason: String },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl TripError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TripError>;
