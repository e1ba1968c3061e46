//! Chunked aggregation engine.
//!
//! Drives the complete aggregation workflow: chunks are pulled from a
//! [`ChunkSource`] strictly in order, each one is folded completely into a
//! single [`AccumulatorSet`] owned by the driver, and the final state is
//! handed to the report finalizer once the source is exhausted.

pub mod chunk;
pub mod chunk_source;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use self::{
    chunk::ChunkProcessor,
    chunk_source::{ChunkSource, CsvChunkSource},
    stats::RunStats,
};

use crate::accumulator::AccumulatorSet;
use crate::config::AggregatorConfig;
use crate::error::Result;
use crate::report::{FinalReports, finalize};

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Output of a completed aggregation run
#[derive(Debug, Clone)]
pub struct AggregationRun {
    pub reports: FinalReports,
    pub stats: RunStats,
    pub elapsed: Duration,
}

/// Pulls chunks from a source and folds them into one accumulator set
#[derive(Debug, Clone)]
pub struct AggregationDriver {
    config: AggregatorConfig,
}

impl AggregationDriver {
    /// Create a new driver
    pub fn new(config: AggregatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate a CSV file on disk
    pub fn run_path(&self, input_path: &Path) -> Result<AggregationRun> {
        let mut source = CsvChunkSource::from_path(input_path, self.config.chunk_size)?;
        self.run(&mut source)
    }

    /// Fold every chunk of `source` and finalize the reports
    pub fn run<S: ChunkSource>(&self, source: &mut S) -> Result<AggregationRun> {
        let start_time = Instant::now();
        let (accumulators, stats) = self.fold_source(source)?;
        let reports = finalize(&accumulators);

        Ok(AggregationRun {
            reports,
            stats,
            elapsed: start_time.elapsed(),
        })
    }

    /// Fold every chunk of `source` into a fresh accumulator set
    pub fn fold_source<S: ChunkSource>(&self, source: &mut S) -> Result<(AccumulatorSet, RunStats)> {
        let mut accumulators = AccumulatorSet::new();
        let mut stats = RunStats::new(self.config.max_reported_failures);
        let progress = self.progress_bar();

        let mapping = source.column_mapping().clone();
        let processor = ChunkProcessor::new(&mapping);

        while let Some(chunk) = source.next_chunk()? {
            debug!(
                "Folding chunk {} ({} rows)",
                stats.chunks_processed + 1,
                chunk.len()
            );
            processor.process_chunk(&chunk, &mut accumulators, &mut stats);
            progress.set_message(format!(
                "{} rows, {} skipped",
                stats.rows_read, stats.rows_failed
            ));
            progress.tick();
        }

        progress.finish_and_clear();

        if stats.rows_read > 0 && accumulators.is_empty() {
            warn!("None of the {} rows could be normalized", stats.rows_read);
        }
        info!("{}", stats.summary());

        Ok((accumulators, stats))
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            progress.set_style(style);
        }
        progress.set_message("Aggregating trips");
        progress
    }
}
