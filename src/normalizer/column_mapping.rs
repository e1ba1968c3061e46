//! Header resolution for trip record columns
//!
//! Columns are consumed by name. The mapping is built once per input from the
//! header row so each field lookup during normalization is an index access.

use crate::constants::columns;
use crate::error::{Result, TripError};
use csv::StringRecord;
use std::collections::HashMap;

/// Resolved positions of the columns the normalizer reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Column name to index mapping for the whole header
    pub name_to_index: HashMap<String, usize>,

    pub trip_distance: usize,
    pub pickup_datetime: usize,
    pub dropoff_datetime: usize,
    pub rate_code_id: usize,
    pub total_amount: usize,
    pub tip_amount: usize,
    pub tolls_amount: usize,
    pub passenger_count: usize,
    pub pickup_location_id: usize,
}

impl ColumnMapping {
    /// Build the mapping from a header row, failing on the first required column
    /// that is absent
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated names
            name_to_index
                .entry(header.trim().to_string())
                .or_insert(index);
        }

        let require = |column: &str| -> Result<usize> {
            name_to_index
                .get(column)
                .copied()
                .ok_or_else(|| TripError::missing_column(column))
        };

        Ok(Self {
            trip_distance: require(columns::TRIP_DISTANCE)?,
            pickup_datetime: require(columns::PICKUP_DATETIME)?,
            dropoff_datetime: require(columns::DROPOFF_DATETIME)?,
            rate_code_id: require(columns::RATE_CODE_ID)?,
            total_amount: require(columns::TOTAL_AMOUNT)?,
            tip_amount: require(columns::TIP_AMOUNT)?,
            tolls_amount: require(columns::TOLLS_AMOUNT)?,
            passenger_count: require(columns::PASSENGER_COUNT)?,
            pickup_location_id: require(columns::PICKUP_LOCATION_ID)?,
            name_to_index,
        })
    }

    /// Number of columns in the header
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}
