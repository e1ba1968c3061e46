//! Passenger sums and trip counts per pickup date and location

use crate::models::TripRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassengerTally {
    pub total_passengers: i64,
    pub trip_count: u64,
}

impl PassengerTally {
    /// Count one trip; the passenger sum saturates instead of overflowing
    fn add(&mut self, passengers: i64) {
        self.total_passengers = self.total_passengers.saturating_add(passengers);
        self.trip_count += 1;
    }

    /// Mean passengers per trip, `None` before any trip was counted
    pub fn average(&self) -> Option<f64> {
        (self.trip_count > 0).then(|| self.total_passengers as f64 / self.trip_count as f64)
    }
}

/// Passenger tallies keyed by pickup date, then pickup location id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerAggregate {
    tallies: BTreeMap<NaiveDate, BTreeMap<String, PassengerTally>>,
}

impl PassengerAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, trip: &TripRecord) {
        let locations = self.tallies.entry(trip.pickup_date()).or_default();

        // The location id is only copied the first time a key is seen
        if let Some(tally) = locations.get_mut(trip.pickup_location_id.as_str()) {
            tally.add(trip.passenger_count);
            return;
        }
        locations
            .entry(trip.pickup_location_id.clone())
            .or_default()
            .add(trip.passenger_count);
    }

    pub fn get(&self, date: NaiveDate, location: &str) -> Option<&PassengerTally> {
        self.tallies.get(&date)?.get(location)
    }

    /// Tallies ordered by date, then location id
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str, &PassengerTally)> {
        self.tallies.iter().flat_map(|(date, locations)| {
            locations
                .iter()
                .map(move |(location, tally)| (*date, location.as_str(), tally))
        })
    }

    pub fn len(&self) -> usize {
        self.tallies.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}
