//! Columnar representation of report rows
//!
//! Reports are handed to polars as `DataFrame`s so the same rows can be
//! written as CSV or Parquet. Dates are rendered as `YYYY-MM-DD` strings.

use crate::constants::REPORT_DATE_FORMAT;
use crate::models::{AirportAmountsRow, DistanceSummaryRow, PassengerAverageRow};
use polars::prelude::*;

/// Report rows that can be laid out as a polars frame
pub trait ReportFrame: Sized {
    /// Column names in output order
    const COLUMNS: &'static [&'static str];

    fn to_frame(rows: &[Self]) -> PolarsResult<DataFrame>;
}

impl ReportFrame for DistanceSummaryRow {
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "time_of_day",
        "shortest_distance",
        "longest_distance",
    ];

    fn to_frame(rows: &[Self]) -> PolarsResult<DataFrame> {
        let dates: Vec<String> = rows
            .iter()
            .map(|row| row.date.format(REPORT_DATE_FORMAT).to_string())
            .collect();
        let buckets: Vec<&str> = rows.iter().map(|row| row.time_of_day.as_str()).collect();
        let shortest: Vec<f64> = rows.iter().map(|row| row.shortest_distance).collect();
        let longest: Vec<f64> = rows.iter().map(|row| row.longest_distance).collect();

        df!(
            Self::COLUMNS[0] => dates,
            Self::COLUMNS[1] => buckets,
            Self::COLUMNS[2] => shortest,
            Self::COLUMNS[3] => longest
        )
    }
}

impl ReportFrame for AirportAmountsRow {
    const COLUMNS: &'static [&'static str] =
        &["category", "total_amount", "tip_amount", "tolls_amount"];

    fn to_frame(rows: &[Self]) -> PolarsResult<DataFrame> {
        let categories: Vec<&str> = rows.iter().map(|row| row.category.as_str()).collect();
        let totals: Vec<f64> = rows.iter().map(|row| row.total_amount).collect();
        let tips: Vec<f64> = rows.iter().map(|row| row.tip_amount).collect();
        let tolls: Vec<f64> = rows.iter().map(|row| row.tolls_amount).collect();

        df!(
            Self::COLUMNS[0] => categories,
            Self::COLUMNS[1] => totals,
            Self::COLUMNS[2] => tips,
            Self::COLUMNS[3] => tolls
        )
    }
}

impl ReportFrame for PassengerAverageRow {
    const COLUMNS: &'static [&'static str] =
        &["date", "pickup_location_id", "average_passenger_count"];

    fn to_frame(rows: &[Self]) -> PolarsResult<DataFrame> {
        let dates: Vec<String> = rows
            .iter()
            .map(|row| row.date.format(REPORT_DATE_FORMAT).to_string())
            .collect();
        let locations: Vec<&str> = rows
            .iter()
            .map(|row| row.pickup_location_id.as_str())
            .collect();
        let averages: Vec<f64> = rows.iter().map(|row| row.average_passenger_count).collect();

        df!(
            Self::COLUMNS[0] => dates,
            Self::COLUMNS[1] => locations,
            Self::COLUMNS[2] => averages
        )
    }
}
