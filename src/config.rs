//! Configuration management and validation.
//!
//! Provides the run configuration for chunked aggregation and report
//! output, with builder-style overrides used by the CLI and tests.

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_REPORTED_FAILURES};
use crate::error::{Result, TripError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File formats a report can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated values with a header row
    Csv,
    /// Snappy-compressed Parquet
    Parquet,
}

impl OutputFormat {
    /// File extension used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "parquet" => Ok(OutputFormat::Parquet),
            other => Err(TripError::configuration(format!(
                "Unknown output format '{}' (expected csv or parquet)",
                other
            ))),
        }
    }
}

/// Global configuration for an aggregation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Rows pulled from the input per chunk
    pub chunk_size: usize,

    /// Format of the written reports
    pub output_format: OutputFormat,

    /// Show a progress spinner while folding chunks
    pub show_progress: bool,

    /// Number of row failure messages kept for the run summary
    pub max_reported_failures: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            output_format: OutputFormat::Csv,
            show_progress: true,
            max_reported_failures: DEFAULT_MAX_REPORTED_FAILURES,
        }
    }
}

impl AggregatorConfig {
    /// Set chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Disable the progress spinner
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Set how many failure messages are retained
    pub fn with_max_reported_failures(mut self, max_reported_failures: usize) -> Self {
        self.max_reported_failures = max_reported_failures;
        self
    }

    /// Check the configuration for values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(TripError::configuration("chunk_size must be at least 1"));
        }
        Ok(())
    }
}
