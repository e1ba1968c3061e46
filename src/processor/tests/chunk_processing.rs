//! Chunk processor tests: failure isolation and eligibility rules

use crate::accumulator::AccumulatorSet;
use crate::models::AirportCategory;
use crate::processor::{ChunkProcessor, RunStats};
use crate::test_helpers::{TripRowBuilder, trip_mapping};
use chrono::NaiveDate;

fn jan_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[test]
fn test_malformed_row_skipped_and_later_rows_processed() {
    let chunk = vec![
        TripRowBuilder::new().rate_code("2").raw(1),
        TripRowBuilder::new()
            .distance("not-a-number")
            .rate_code("2")
            .location("999")
            .raw(2),
        TripRowBuilder::new().rate_code("2").raw(3),
    ];
    let mapping = trip_mapping();
    let mut accumulators = AccumulatorSet::new();
    let mut stats = RunStats::default();

    ChunkProcessor::new(&mapping).process_chunk(&chunk, &mut accumulators, &mut stats);

    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.rows_failed, 1);
    assert_eq!(stats.rows_normalized, 2);
    assert_eq!(stats.chunks_processed, 1);
    assert_eq!(stats.failures.len(), 1);
    assert!(stats.failures[0].starts_with("Row 2:"));

    // The malformed row is absent from all three aggregates
    assert!(accumulators.passenger.get(jan_15(), "999").is_none());
    assert_eq!(
        accumulators.airport.get(AirportCategory::Jfk).total_amount,
        40.0
    );
    assert_eq!(accumulators.passenger.get(jan_15(), "161").unwrap().trip_count, 2);
}

#[test]
fn test_invalid_trips_still_counted_for_payments_and_passengers() {
    let chunk = vec![
        TripRowBuilder::new().distance("0").rate_code("2").raw(1),
        TripRowBuilder::new()
            .times("2024-01-15 10:00:00", "2024-01-15 10:00:30")
            .rate_code("2")
            .raw(2),
        TripRowBuilder::new()
            .times("2024-01-15 10:00:00", "2024-01-15 09:59:00")
            .rate_code("2")
            .raw(3),
    ];
    let mapping = trip_mapping();
    let mut accumulators = AccumulatorSet::new();
    let mut stats = RunStats::default();

    ChunkProcessor::new(&mapping).process_chunk(&chunk, &mut accumulators, &mut stats);

    assert_eq!(stats.distance_eligible, 0);
    assert_eq!(stats.airport_trips, 3);
    assert!(accumulators.distance.is_empty());
    assert_eq!(
        accumulators.airport.get(AirportCategory::Jfk).total_amount,
        60.0
    );
    assert_eq!(accumulators.passenger.get(jan_15(), "161").unwrap().trip_count, 3);
}

#[test]
fn test_blank_defaults_do_not_reject_rows() {
    let chunk = vec![
        TripRowBuilder::new().rate_code("").passengers("").raw(1),
        TripRowBuilder::new().passengers("3").raw(2),
    ];
    let mapping = trip_mapping();
    let mut accumulators = AccumulatorSet::new();
    let mut stats = RunStats::default();

    ChunkProcessor::new(&mapping).process_chunk(&chunk, &mut accumulators, &mut stats);

    assert_eq!(stats.rows_failed, 0);
    assert_eq!(stats.airport_trips, 0);
    let tally = accumulators.passenger.get(jan_15(), "161").unwrap();
    assert_eq!(tally.total_passengers, 3);
    assert_eq!(tally.trip_count, 2);
}

#[test]
fn test_reported_failures_are_capped() {
    let chunk: Vec<_> = (1..=5)
        .map(|ordinal| TripRowBuilder::new().distance("x").raw(ordinal))
        .collect();
    let mapping = trip_mapping();
    let mut accumulators = AccumulatorSet::new();
    let mut stats = RunStats::new(2);

    ChunkProcessor::new(&mapping).process_chunk(&chunk, &mut accumulators, &mut stats);

    assert_eq!(stats.rows_failed, 5);
    assert_eq!(stats.failures.len(), 2);
    assert_eq!(stats.success_rate(), 0.0);
}
