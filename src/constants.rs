//! Application constants for the trip aggregator
//!
//! Input column names, parsing formats, validity thresholds and the fixed
//! rate-code table used throughout the crate.

// =============================================================================
// Input Columns
// =============================================================================

/// Column names consumed from the yellow taxi trip records
pub mod columns {
    pub const TRIP_DISTANCE: &str = "trip_distance";
    pub const PICKUP_DATETIME: &str = "tpep_pickup_datetime";
    pub const DROPOFF_DATETIME: &str = "tpep_dropoff_datetime";
    pub const RATE_CODE_ID: &str = "RatecodeID";
    pub const TOTAL_AMOUNT: &str = "total_amount";
    pub const TIP_AMOUNT: &str = "tip_amount";
    pub const TOLLS_AMOUNT: &str = "tolls_amount";
    pub const PASSENGER_COUNT: &str = "passenger_count";
    pub const PICKUP_LOCATION_ID: &str = "PULocationID";

    /// Every column the normalizer reads; a header without any of these is rejected
    pub const REQUIRED: &[&str] = &[
        TRIP_DISTANCE,
        PICKUP_DATETIME,
        DROPOFF_DATETIME,
        RATE_CODE_ID,
        TOTAL_AMOUNT,
        TIP_AMOUNT,
        TOLLS_AMOUNT,
        PASSENGER_COUNT,
        PICKUP_LOCATION_ID,
    ];
}

// =============================================================================
// Parsing
// =============================================================================

/// Naive local timestamp format of pickup and dropoff columns
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rate code assumed when `RatecodeID` is blank
pub const DEFAULT_RATE_CODE_ID: i64 = 1;

/// Passenger count assumed when `passenger_count` is blank
pub const DEFAULT_PASSENGER_COUNT: i64 = 0;

// =============================================================================
// Trip Validity
// =============================================================================

/// Trips longer than this (miles) are treated as meter anomalies
pub const MAX_TRIP_DISTANCE: f64 = 300.0;

/// Trips shorter than this (seconds) are treated as meter anomalies
pub const MIN_TRIP_DURATION_SECS: i64 = 60;

// =============================================================================
// Time of Day Buckets (pickup hour, half-open ranges)
// =============================================================================

pub const MORNING_START_HOUR: u32 = 6;
pub const AFTERNOON_START_HOUR: u32 = 12;
pub const EVENING_START_HOUR: u32 = 18;
pub const NIGHT_START_HOUR: u32 = 22;

// =============================================================================
// Processing Defaults
// =============================================================================

/// Rows per chunk pulled from the input
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Failure messages retained in run statistics
pub const DEFAULT_MAX_REPORTED_FAILURES: usize = 20;

/// Decimal places of the average passenger count
pub const AVERAGE_DECIMAL_PLACES: usize = 2;

// =============================================================================
// Output
// =============================================================================

pub const DISTANCE_REPORT_NAME: &str = "trip_distance_summary";
pub const AIRPORT_REPORT_NAME: &str = "amounts_by_airports";
pub const PASSENGER_REPORT_NAME: &str = "avg_passenger_count";

/// Output date format for report rows
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Build a report file name for the given output extension
pub fn report_filename(report_name: &str, extension: &str) -> String {
    format!("{}.{}", report_name, extension)
}
