//! Trip record normalization
//!
//! Converts one raw CSV row into a [`TripRecord`], or a [`ParseFailure`]
//! carrying the row ordinal and the first field that could not be parsed.

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    FieldResult, parse_required_datetime, parse_required_f64, parse_truncated_i64_or,
    parse_verbatim,
};
use crate::constants::{DEFAULT_PASSENGER_COUNT, DEFAULT_RATE_CODE_ID, columns};
use crate::models::{ParseFailure, RawRow, TripRecord};

/// Normalize a raw row into a trip record
pub fn normalize_row(
    row: &RawRow,
    mapping: &ColumnMapping,
) -> std::result::Result<TripRecord, ParseFailure> {
    parse_trip_fields(row, mapping).map_err(|cause| ParseFailure::new(row.ordinal, cause))
}

fn parse_trip_fields(row: &RawRow, mapping: &ColumnMapping) -> FieldResult<TripRecord> {
    let record = &row.record;

    Ok(TripRecord {
        trip_distance: parse_required_f64(record, mapping.trip_distance, columns::TRIP_DISTANCE)?,
        pickup_datetime: parse_required_datetime(
            record,
            mapping.pickup_datetime,
            columns::PICKUP_DATETIME,
        )?,
        dropoff_datetime: parse_required_datetime(
            record,
            mapping.dropoff_datetime,
            columns::DROPOFF_DATETIME,
        )?,
        rate_code_id: parse_truncated_i64_or(
            record,
            mapping.rate_code_id,
            columns::RATE_CODE_ID,
            DEFAULT_RATE_CODE_ID,
        )?,
        total_amount: parse_required_f64(record, mapping.total_amount, columns::TOTAL_AMOUNT)?,
        tip_amount: parse_required_f64(record, mapping.tip_amount, columns::TIP_AMOUNT)?,
        tolls_amount: parse_required_f64(record, mapping.tolls_amount, columns::TOLLS_AMOUNT)?,
        passenger_count: parse_truncated_i64_or(
            record,
            mapping.passenger_count,
            columns::PASSENGER_COUNT,
            DEFAULT_PASSENGER_COUNT,
        )?,
        pickup_location_id: parse_verbatim(
            record,
            mapping.pickup_location_id,
            columns::PICKUP_LOCATION_ID,
        )?,
    })
}
