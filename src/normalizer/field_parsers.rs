//! Field parsing utilities for trip records
//!
//! Each parser returns the field value or a human readable cause naming the
//! column and the offending text. Causes become part of a row's
//! [`ParseFailure`](crate::models::ParseFailure).

use crate::constants::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use csv::ByteRecord;

/// Result of parsing a single field; the error is the failure cause
pub type FieldResult<T> = std::result::Result<T, String>;

/// Get a field value, failing if the record is too short to contain it or
/// the field is not valid UTF-8
pub fn get_field<'a>(record: &'a ByteRecord, index: usize, field_name: &str) -> FieldResult<&'a str> {
    match record.get(index) {
        Some(bytes) => decode_field(bytes, field_name),
        None => Err(format!("{}: missing value", field_name)),
    }
}

/// Parse a required floating point field
pub fn parse_required_f64(record: &ByteRecord, index: usize, field_name: &str) -> FieldResult<f64> {
    let value = get_field(record, index, field_name)?.trim();
    if value.is_empty() {
        return Err(format!("{}: missing value", field_name));
    }
    parse_finite(value, field_name)
}

/// Parse a required naive timestamp in `YYYY-MM-DD HH:MM:SS` form
pub fn parse_required_datetime(
    record: &ByteRecord,
    index: usize,
    field_name: &str,
) -> FieldResult<NaiveDateTime> {
    let value = get_field(record, index, field_name)?;
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        format!(
            "{}: '{}' does not match 'YYYY-MM-DD HH:MM:SS' ({})",
            field_name, value, e
        )
    })
}

/// Parse an integer field that may be written as a float, truncating toward zero
///
/// Blank or absent values yield `default` instead of failing.
pub fn parse_truncated_i64_or(
    record: &ByteRecord,
    index: usize,
    field_name: &str,
    default: i64,
) -> FieldResult<i64> {
    let value = match record.get(index) {
        Some(bytes) => decode_field(bytes, field_name)?.trim(),
        None => "",
    };
    if value.is_empty() {
        return Ok(default);
    }
    parse_finite(value, field_name).map(|number| number.trunc() as i64)
}

/// Take a field verbatim, without trimming or numeric coercion
pub fn parse_verbatim(record: &ByteRecord, index: usize, field_name: &str) -> FieldResult<String> {
    get_field(record, index, field_name).map(str::to_string)
}

fn decode_field<'a>(bytes: &'a [u8], field_name: &str) -> FieldResult<&'a str> {
    std::str::from_utf8(bytes).map_err(|_| {
        format!(
            "{}: '{}' is not valid UTF-8",
            field_name,
            String::from_utf8_lossy(bytes)
        )
    })
}

fn parse_finite(value: &str, field_name: &str) -> FieldResult<f64> {
    let number = value
        .parse::<f64>()
        .map_err(|_| format!("{}: '{}' is not a number", field_name, value))?;
    if !number.is_finite() {
        return Err(format!("{}: '{}' is not a finite number", field_name, value));
    }
    Ok(number)
}
