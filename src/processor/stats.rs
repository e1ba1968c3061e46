//! Run statistics for chunked aggregation
//!
//! Tracks how many rows were read, folded and skipped so that a run where
//! every row failed can be told apart from a run with no matching trips.

use crate::accumulator::FoldOutcome;
use crate::constants::DEFAULT_MAX_REPORTED_FAILURES;
use crate::models::ParseFailure;
use serde::Serialize;

/// Counters collected while folding chunks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    /// Number of chunks pulled from the source
    pub chunks_processed: usize,

    /// Total number of data rows encountered
    pub rows_read: u64,

    /// Rows normalized and folded into the accumulators
    pub rows_normalized: u64,

    /// Rows skipped because they could not be normalized
    pub rows_failed: u64,

    /// Normalized rows that passed the distance validity filter
    pub distance_eligible: u64,

    /// Normalized rows whose rate code mapped to an airport category
    pub airport_trips: u64,

    /// First failure messages, capped at `max_reported_failures`
    pub failures: Vec<String>,

    #[serde(skip)]
    max_reported_failures: usize,
}

impl RunStats {
    /// Create new empty statistics retaining up to `max_reported_failures` messages
    pub fn new(max_reported_failures: usize) -> Self {
        Self {
            chunks_processed: 0,
            rows_read: 0,
            rows_normalized: 0,
            rows_failed: 0,
            distance_eligible: 0,
            airport_trips: 0,
            failures: Vec::new(),
            max_reported_failures,
        }
    }

    pub fn record_failure(&mut self, failure: &ParseFailure) {
        self.rows_read += 1;
        self.rows_failed += 1;
        if self.failures.len() < self.max_reported_failures {
            self.failures.push(failure.to_string());
        }
    }

    pub fn record_fold(&mut self, outcome: FoldOutcome) {
        self.rows_read += 1;
        self.rows_normalized += 1;
        if outcome.distance_eligible {
            self.distance_eligible += 1;
        }
        if outcome.airport_category.is_some() {
            self.airport_trips += 1;
        }
    }

    /// Percentage of rows that normalized successfully
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_normalized as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Aggregation Summary: {} rows in {} chunks | {} folded ({:.1}%) | \
             {} skipped | {} distance-eligible | {} airport trips",
            self.rows_read,
            self.chunks_processed,
            self.rows_normalized,
            self.success_rate(),
            self.rows_failed,
            self.distance_eligible,
            self.airport_trips
        )
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPORTED_FAILURES)
    }
}
