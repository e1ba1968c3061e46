//! Command line argument definitions
//!
//! Maps the command line onto an [`AggregatorConfig`] and the input/output
//! locations of a run.

use crate::config::{AggregatorConfig, OutputFormat};
use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::error::{Result, TripError};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "taxi_trip_aggregator")]
#[command(
    about = "Aggregate NYC yellow taxi trip records into distance, airport payment and passenger summaries"
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Trip records in CSV format (e.g. yellow_tripdata_2024-01.csv)
    #[arg(value_name = "INPUT_CSV")]
    pub input_path: PathBuf,

    /// Folder the summary reports are written to (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Rows folded per chunk; bounds memory, never changes results
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Report format (csv, parquet)
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.is_file() {
            return Err(TripError::InputNotFound {
                path: self.input_path.clone(),
            });
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(TripError::configuration(format!(
                "Output path is not a directory: {}",
                self.output_dir.display()
            )));
        }

        if self.chunk_size == 0 {
            return Err(TripError::configuration("--chunk-size must be at least 1"));
        }

        Ok(())
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> Result<AggregatorConfig> {
        let output_format: OutputFormat = self.format.parse()?;
        let mut config = AggregatorConfig::default()
            .with_chunk_size(self.chunk_size)
            .with_output_format(output_format);
        if !self.show_progress() {
            config = config.without_progress();
        }
        config.validate()?;
        Ok(config)
    }

    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
