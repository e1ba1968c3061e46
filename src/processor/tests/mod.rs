//! Tests for the chunked aggregation engine
//!
//! Exercise the pipeline on in-memory CSV inputs: chunking, per-row failure
//! isolation, chunk-size invariance and a literal end-to-end run.

pub mod chunk_processing;
pub mod end_to_end;

use crate::config::AggregatorConfig;
use crate::processor::AggregationDriver;

/// Driver with the given chunk size and no progress output
pub fn quiet_driver(chunk_size: usize) -> AggregationDriver {
    AggregationDriver::new(
        AggregatorConfig::default()
            .with_chunk_size(chunk_size)
            .without_progress(),
    )
    .unwrap()
}
