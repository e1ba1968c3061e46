//! Row normalization and trip validity rules
//!
//! Turns raw CSV records into typed [`TripRecord`](crate::models::TripRecord)s
//! and classifies them for the accumulators.
//!
//! ## Architecture
//!
//! - [`column_mapping`] - Resolves the required columns against the input header once
//! - [`field_parsers`] - Per-field parsing with blank-value defaults
//! - [`record_parser`] - Builds a full trip record or a [`ParseFailure`](crate::models::ParseFailure)
//! - [`validity`] - Distance validity filter and time-of-day bucketing
//!
//! Defaulting happens before failure checks: a blank rate code or passenger
//! count never rejects a row, only non-numeric values do.

pub mod column_mapping;
pub mod field_parsers;
pub mod record_parser;
pub mod validity;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use record_parser::normalize_row;
pub use validity::{is_valid_trip, pickup_time_of_day, time_of_day};
