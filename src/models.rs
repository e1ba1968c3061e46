//! Core data structures for trip aggregation.
//!
//! Defines the raw and normalized trip rows, the classification enums
//! used as accumulator keys, and the flat rows of the three summary reports.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ByteRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One input record as read from the source, tagged with its 1-based position
///
/// Fields stay undecoded bytes; only the columns the normalizer reads are
/// checked for UTF-8, so a bad byte elsewhere never rejects the row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub ordinal: u64,
    pub record: ByteRecord,
}

impl RawRow {
    pub fn new(ordinal: u64, record: ByteRecord) -> Self {
        Self { ordinal, record }
    }
}

/// A fully normalized trip, consumed immediately by the accumulators
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub trip_distance: f64,
    pub pickup_datetime: NaiveDateTime,
    pub dropoff_datetime: NaiveDateTime,
    pub rate_code_id: i64,
    pub total_amount: f64,
    pub tip_amount: f64,
    pub tolls_amount: f64,
    pub passenger_count: i64,
    /// Kept verbatim; location codes are never coerced to numbers
    pub pickup_location_id: String,
}

impl TripRecord {
    pub fn pickup_date(&self) -> NaiveDate {
        self.pickup_datetime.date()
    }
}

/// A row that could not be normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub ordinal: u64,
    pub cause: String,
}

impl ParseFailure {
    pub fn new(ordinal: u64, cause: impl Into<String>) -> Self {
        Self {
            ordinal,
            cause: cause.into(),
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: Invalid value - {}", self.ordinal, self.cause)
    }
}

/// Time-of-day bucket derived from the pickup hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "MORNING",
            TimeOfDay::Afternoon => "AFTERNOON",
            TimeOfDay::Evening => "EVENING",
            TimeOfDay::Night => "NIGHT",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Airport fare categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AirportCategory {
    #[serde(rename = "JFK")]
    Jfk,
    #[serde(rename = "Newark")]
    Newark,
    #[serde(rename = "Nassau/WC")]
    NassauWestchester,
}

impl AirportCategory {
    /// All categories in fixed enumeration order
    pub const ALL: [AirportCategory; 3] = [
        AirportCategory::Jfk,
        AirportCategory::Newark,
        AirportCategory::NassauWestchester,
    ];

    /// Map a rate code onto its airport category, if it has one
    pub fn from_rate_code(rate_code_id: i64) -> Option<Self> {
        match rate_code_id {
            2 => Some(AirportCategory::Jfk),
            3 => Some(AirportCategory::Newark),
            4 => Some(AirportCategory::NassauWestchester),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AirportCategory::Jfk => "JFK",
            AirportCategory::Newark => "Newark",
            AirportCategory::NassauWestchester => "Nassau/WC",
        }
    }
}

impl fmt::Display for AirportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shortest and longest valid trip for one (date, time of day) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceSummaryRow {
    pub date: NaiveDate,
    pub time_of_day: TimeOfDay,
    pub shortest_distance: f64,
    pub longest_distance: f64,
}

/// Payment sums for one airport category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportAmountsRow {
    pub category: AirportCategory,
    pub total_amount: f64,
    pub tip_amount: f64,
    pub tolls_amount: f64,
}

/// Average passengers for one (date, pickup location) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassengerAverageRow {
    pub date: NaiveDate,
    pub pickup_location_id: String,
    pub average_passenger_count: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_code_mapping() {
        assert_eq!(AirportCategory::from_rate_code(2), Some(AirportCategory::Jfk));
        assert_eq!(
            AirportCategory::from_rate_code(3),
            Some(AirportCategory::Newark)
        );
        assert_eq!(
            AirportCategory::from_rate_code(4),
            Some(AirportCategory::NassauWestchester)
        );
        for code in [1, 5, 6, 99, -2, 0] {
            assert_eq!(AirportCategory::from_rate_code(code), None);
        }
    }

    #[test]
    fn test_category_order_and_labels() {
        let labels: Vec<_> = AirportCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["JFK", "Newark", "Nassau/WC"]);

        let mut sorted = AirportCategory::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, AirportCategory::ALL.to_vec());
    }

    #[test]
    fn test_parse_failure_display() {
        let failure = ParseFailure::new(7, "trip_distance: 'abc' is not a number");
        assert_eq!(
            failure.to_string(),
            "Row 7: Invalid value - trip_distance: 'abc' is not a number"
        );
    }
}
