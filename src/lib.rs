//! Taxi Trip Aggregator Library
//!
//! Streams NYC yellow taxi trip records in fixed-size chunks and folds them
//! into three summary reports:
//! - Shortest and longest valid trip per pickup date and time of day
//! - Total, tip and toll sums for the JFK, Newark and Nassau/WC rate codes
//! - Average passenger count per pickup date and pickup location
//!
//! Accumulator state is bounded by the number of distinct report keys, so
//! results never depend on the chunk size and memory never depends on the
//! input size. Rows that cannot be normalized are logged and skipped.

pub mod accumulator;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod processor;
pub mod report;

#[cfg(test)]
mod test_helpers;

// Re-export commonly used types
pub use config::{AggregatorConfig, OutputFormat};
pub use error::{Result, TripError};
pub use models::{
    AirportAmountsRow, AirportCategory, DistanceSummaryRow, ParseFailure, PassengerAverageRow,
    RawRow, TimeOfDay, TripRecord,
};
pub use processor::{AggregationDriver, AggregationRun, RunStats};
pub use report::{FinalReports, Report, ReportKind};
