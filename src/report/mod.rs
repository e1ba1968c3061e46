//! Report finalization and delivery
//!
//! - [`finalizer`] - Converts final accumulator state into flat report rows
//! - [`frame`] - Columnar (polars) representation of each report
//! - [`sink`] - Writes reports to storage, skipping reports without data

pub mod finalizer;
pub mod frame;
pub mod sink;

#[cfg(test)]
pub mod tests;

pub use finalizer::{FinalReports, finalize};
pub use frame::ReportFrame;
pub use sink::{FileReportSink, PublishSummary, ReportSink, SinkOutcome, publish_reports};

use crate::constants::{AIRPORT_REPORT_NAME, DISTANCE_REPORT_NAME, PASSENGER_REPORT_NAME};
use std::fmt;

/// The three summary datasets produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Distance,
    Airport,
    Passenger,
}

impl ReportKind {
    /// File stem the report is written under
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportKind::Distance => DISTANCE_REPORT_NAME,
            ReportKind::Airport => AIRPORT_REPORT_NAME,
            ReportKind::Passenger => PASSENGER_REPORT_NAME,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Finalized report contents, or an explicit signal that there is nothing to write
#[derive(Debug, Clone, PartialEq)]
pub enum Report<T> {
    Rows(Vec<T>),
    NoData,
}

impl<T> Report<T> {
    /// Wrap rows, turning an empty set into [`Report::NoData`]
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Report::NoData
        } else {
            Report::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Report::Rows(rows) => rows,
            Report::NoData => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Report::NoData)
    }
}
