//! Trip validity filter and time-of-day classification
//!
//! The validity filter guards the distance extremes only. Airport totals and
//! passenger averages never consult it: payment figures are kept even for
//! trips with meter anomalies.

use crate::constants::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MAX_TRIP_DISTANCE, MIN_TRIP_DURATION_SECS,
    MORNING_START_HOUR, NIGHT_START_HOUR,
};
use crate::models::{TimeOfDay, TripRecord};
use chrono::{TimeDelta, Timelike};

/// Check whether a trip is trustworthy enough for distance extremes
///
/// A trip is rejected when the dropoff precedes the pickup, the distance is
/// exactly zero or above [`MAX_TRIP_DISTANCE`], or it lasted less than
/// [`MIN_TRIP_DURATION_SECS`].
pub fn is_valid_trip(trip: &TripRecord) -> bool {
    if trip.dropoff_datetime < trip.pickup_datetime {
        return false;
    }

    if trip.trip_distance == 0.0 || trip.trip_distance > MAX_TRIP_DISTANCE {
        return false;
    }

    let duration = trip.dropoff_datetime - trip.pickup_datetime;
    duration >= TimeDelta::seconds(MIN_TRIP_DURATION_SECS)
}

/// Bucket a pickup hour (0-23) into a time of day
pub fn time_of_day(hour: u32) -> TimeOfDay {
    match hour {
        h if (MORNING_START_HOUR..AFTERNOON_START_HOUR).contains(&h) => TimeOfDay::Morning,
        h if (AFTERNOON_START_HOUR..EVENING_START_HOUR).contains(&h) => TimeOfDay::Afternoon,
        h if (EVENING_START_HOUR..NIGHT_START_HOUR).contains(&h) => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Time of day of a trip's pickup
pub fn pickup_time_of_day(trip: &TripRecord) -> TimeOfDay {
    time_of_day(trip.pickup_datetime.hour())
}
