//! Report persistence
//!
//! A sink receives each finalized report independently. Reports without data
//! are skipped with a warning instead of producing header-only files, and a
//! failed write never prevents the remaining reports from being written.

use super::frame::ReportFrame;
use super::{FinalReports, Report, ReportKind};
use crate::config::OutputFormat;
use crate::constants::report_filename;
use crate::error::{Result, TripError};
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

/// What a sink did with one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOutcome {
    Written(PathBuf),
    Skipped,
}

/// Destination for finalized reports
pub trait ReportSink {
    fn write_report<T: ReportFrame>(
        &mut self,
        kind: ReportKind,
        report: &Report<T>,
    ) -> Result<SinkOutcome>;
}

/// Writes reports as files into an output directory
#[derive(Debug, Clone)]
pub struct FileReportSink {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl FileReportSink {
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Path a report of the given kind is written to
    pub fn report_path(&self, kind: ReportKind) -> PathBuf {
        self.output_dir
            .join(report_filename(kind.file_stem(), self.format.extension()))
    }

    /// Write to a temporary file beside the destination, then rename it into place
    fn write_frame_atomically(&self, frame: &mut DataFrame, path: &Path) -> Result<()> {
        let mut temp_file = NamedTempFile::new_in(&self.output_dir)?;

        match self.format {
            OutputFormat::Csv => {
                CsvWriter::new(temp_file.as_file_mut())
                    .include_header(true)
                    .finish(frame)?;
            }
            OutputFormat::Parquet => {
                ParquetWriter::new(temp_file.as_file_mut())
                    .with_compression(ParquetCompression::Snappy)
                    .finish(frame)?;
            }
        }

        temp_file.persist(path).map_err(|e| TripError::Persist {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl ReportSink for FileReportSink {
    fn write_report<T: ReportFrame>(
        &mut self,
        kind: ReportKind,
        report: &Report<T>,
    ) -> Result<SinkOutcome> {
        let path = self.report_path(kind);

        let rows = match report {
            Report::NoData => {
                warn!("No data to write for {}", kind);
                return Ok(SinkOutcome::Skipped);
            }
            Report::Rows(rows) => rows,
        };

        fs::create_dir_all(&self.output_dir)?;

        let mut frame = T::to_frame(rows)?;
        debug!(
            "Writing {} rows x {} columns to {}",
            frame.height(),
            frame.width(),
            path.display()
        );
        self.write_frame_atomically(&mut frame, &path)?;

        info!("The results have been saved to {}", path.display());
        Ok(SinkOutcome::Written(path))
    }
}

/// Result of delivering all three reports
#[derive(Debug, Default)]
pub struct PublishSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<ReportKind>,
    pub failures: Vec<(ReportKind, TripError)>,
}

impl PublishSummary {
    fn record(&mut self, kind: ReportKind, outcome: Result<SinkOutcome>) {
        match outcome {
            Ok(SinkOutcome::Written(path)) => self.written.push(path),
            Ok(SinkOutcome::Skipped) => self.skipped.push(kind),
            Err(e) => {
                error!("An error occurred while writing {}: {}", kind, e);
                self.failures.push((kind, e));
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Deliver every report to the sink; one failed report does not stop the others
pub fn publish_reports<S: ReportSink>(sink: &mut S, reports: &FinalReports) -> PublishSummary {
    let mut summary = PublishSummary::default();

    summary.record(
        ReportKind::Distance,
        sink.write_report(ReportKind::Distance, &reports.distance),
    );
    summary.record(
        ReportKind::Airport,
        sink.write_report(ReportKind::Airport, &reports.airport),
    );
    summary.record(
        ReportKind::Passenger,
        sink.write_report(ReportKind::Passenger, &reports.passenger),
    );

    summary
}
