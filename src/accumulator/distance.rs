//! Shortest and longest valid trip per pickup date and time of day

use crate::models::{TimeOfDay, TripRecord};
use crate::normalizer::pickup_time_of_day;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Distance bounds seen for one key; `shortest <= longest` always holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRange {
    pub shortest: f64,
    pub longest: f64,
}

impl DistanceRange {
    fn new(distance: f64) -> Self {
        Self {
            shortest: distance,
            longest: distance,
        }
    }

    fn observe(&mut self, distance: f64) {
        self.shortest = self.shortest.min(distance);
        self.longest = self.longest.max(distance);
    }
}

/// Distance extremes keyed by (pickup date, time of day)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceExtremes {
    ranges: BTreeMap<(NaiveDate, TimeOfDay), DistanceRange>,
}

impl DistanceExtremes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trip's distance; callers are responsible for the validity filter
    pub fn record(&mut self, trip: &TripRecord) {
        let key = (trip.pickup_date(), pickup_time_of_day(trip));
        self.ranges
            .entry(key)
            .and_modify(|range| range.observe(trip.trip_distance))
            .or_insert_with(|| DistanceRange::new(trip.trip_distance));
    }

    pub fn get(&self, date: NaiveDate, time_of_day: TimeOfDay) -> Option<&DistanceRange> {
        self.ranges.get(&(date, time_of_day))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(NaiveDate, TimeOfDay), &DistanceRange)> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
