//! Shared fixtures for unit tests: trip rows in CSV and raw-row form.

use crate::models::{RawRow, TripRecord};
use crate::normalizer::{ColumnMapping, normalize_row};
use csv::{ByteRecord, StringRecord};

/// Header in the column order of the published yellow taxi files
pub const TRIP_HEADER: &[&str] = &[
    "VendorID",
    "tpep_pickup_datetime",
    "tpep_dropoff_datetime",
    "passenger_count",
    "trip_distance",
    "RatecodeID",
    "PULocationID",
    "tip_amount",
    "tolls_amount",
    "total_amount",
];

pub fn trip_header() -> StringRecord {
    StringRecord::from(TRIP_HEADER.to_vec())
}

pub fn trip_mapping() -> ColumnMapping {
    ColumnMapping::from_headers(&trip_header()).unwrap()
}

/// Builder for one trip row; defaults describe a valid 20 minute morning trip
#[derive(Debug, Clone)]
pub struct TripRowBuilder {
    vendor: String,
    pickup: String,
    dropoff: String,
    passengers: String,
    distance: String,
    rate_code: String,
    location: String,
    tip: String,
    tolls: String,
    total: String,
}

impl Default for TripRowBuilder {
    fn default() -> Self {
        Self {
            vendor: "2".to_string(),
            pickup: "2024-01-15 10:00:00".to_string(),
            dropoff: "2024-01-15 10:20:00".to_string(),
            passengers: "1".to_string(),
            distance: "2.5".to_string(),
            rate_code: "1".to_string(),
            location: "161".to_string(),
            tip: "3.0".to_string(),
            tolls: "0.0".to_string(),
            total: "20.0".to_string(),
        }
    }
}

impl TripRowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `VendorID`, a column the normalizer never reads
    pub fn vendor(mut self, value: &str) -> Self {
        self.vendor = value.to_string();
        self
    }

    pub fn pickup(mut self, value: &str) -> Self {
        self.pickup = value.to_string();
        self
    }

    pub fn dropoff(mut self, value: &str) -> Self {
        self.dropoff = value.to_string();
        self
    }

    pub fn times(self, pickup: &str, dropoff: &str) -> Self {
        self.pickup(pickup).dropoff(dropoff)
    }

    pub fn passengers(mut self, value: &str) -> Self {
        self.passengers = value.to_string();
        self
    }

    pub fn distance(mut self, value: &str) -> Self {
        self.distance = value.to_string();
        self
    }

    pub fn rate_code(mut self, value: &str) -> Self {
        self.rate_code = value.to_string();
        self
    }

    pub fn location(mut self, value: &str) -> Self {
        self.location = value.to_string();
        self
    }

    pub fn amounts(mut self, total: &str, tip: &str, tolls: &str) -> Self {
        self.total = total.to_string();
        self.tip = tip.to_string();
        self.tolls = tolls.to_string();
        self
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.vendor.clone(),
            self.pickup.clone(),
            self.dropoff.clone(),
            self.passengers.clone(),
            self.distance.clone(),
            self.rate_code.clone(),
            self.location.clone(),
            self.tip.clone(),
            self.tolls.clone(),
            self.total.clone(),
        ]
    }

    pub fn raw(&self, ordinal: u64) -> RawRow {
        RawRow::new(ordinal, ByteRecord::from(self.fields()))
    }

    pub fn csv_line(&self) -> String {
        self.fields().join(",")
    }

    /// Normalize the row, panicking if it is malformed
    pub fn trip(&self) -> TripRecord {
        normalize_row(&self.raw(1), &trip_mapping()).unwrap()
    }
}

/// Render rows as CSV text with the standard header
pub fn csv_input(rows: &[TripRowBuilder]) -> String {
    let mut text = TRIP_HEADER.join(",");
    text.push('\n');
    for row in rows {
        text.push_str(&row.csv_line());
        text.push('\n');
    }
    text
}

/// Replace every occurrence of `marker` with a byte that is never valid UTF-8
pub fn with_invalid_utf8(text: &str, marker: &str) -> Vec<u8> {
    let parts: Vec<&[u8]> = text.split(marker).map(str::as_bytes).collect();
    parts.join(&[0xff_u8][..])
}
