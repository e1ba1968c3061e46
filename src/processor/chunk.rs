//! Folding of one chunk into the shared accumulators
//!
//! Each row is normalized independently. A row that fails is logged with its
//! ordinal and skipped; it never stops the rows after it.

use super::stats::RunStats;
use crate::accumulator::AccumulatorSet;
use crate::models::RawRow;
use crate::normalizer::{ColumnMapping, normalize_row};
use tracing::warn;

/// Applies the normalizer to every row of a chunk and folds the successes
#[derive(Debug, Clone, Copy)]
pub struct ChunkProcessor<'a> {
    mapping: &'a ColumnMapping,
}

impl<'a> ChunkProcessor<'a> {
    pub fn new(mapping: &'a ColumnMapping) -> Self {
        Self { mapping }
    }

    /// Fold a chunk, in row order, into `accumulators`
    pub fn process_chunk(
        &self,
        chunk: &[RawRow],
        accumulators: &mut AccumulatorSet,
        stats: &mut RunStats,
    ) {
        for row in chunk {
            match normalize_row(row, self.mapping) {
                Ok(trip) => {
                    let outcome = accumulators.fold(&trip);
                    stats.record_fold(outcome);
                }
                Err(failure) => {
                    warn!("{}", failure);
                    stats.record_failure(&failure);
                }
            }
        }
        stats.chunks_processed += 1;
    }
}
