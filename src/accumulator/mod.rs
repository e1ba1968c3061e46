//! Running aggregates folded from normalized trips
//!
//! Three independent accumulators with different eligibility rules:
//!
//! - [`distance`] - shortest/longest trip per (date, time of day), valid trips only
//! - [`airport`] - payment sums per airport category, every trip with an airport rate code
//! - [`passenger`] - passenger sums and trip counts per (date, pickup location), every trip
//!
//! Keys are only ever added. Memory grows with the number of distinct output
//! keys, never with the number of input rows.

pub mod airport;
pub mod distance;
pub mod passenger;

pub use airport::{AirportTotals, PaymentTotals};
pub use distance::{DistanceExtremes, DistanceRange};
pub use passenger::{PassengerAggregate, PassengerTally};

use crate::models::{AirportCategory, TripRecord};
use crate::normalizer::is_valid_trip;

/// How a single trip was folded into the accumulator set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldOutcome {
    /// The trip passed the validity filter and updated distance extremes
    pub distance_eligible: bool,
    /// The airport category the trip's payments were added to
    pub airport_category: Option<AirportCategory>,
}

/// The three running aggregates of one run, owned by the aggregation driver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccumulatorSet {
    pub distance: DistanceExtremes,
    pub airport: AirportTotals,
    pub passenger: PassengerAggregate,
}

impl AccumulatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trip into all accumulators it is eligible for
    ///
    /// Airport totals and passenger aggregates are updated unconditionally;
    /// distance extremes only when the trip passes [`is_valid_trip`].
    pub fn fold(&mut self, trip: &TripRecord) -> FoldOutcome {
        let airport_category = self.airport.record(trip);
        self.passenger.record(trip);

        let distance_eligible = is_valid_trip(trip);
        if distance_eligible {
            self.distance.record(trip);
        }

        FoldOutcome {
            distance_eligible,
            airport_category,
        }
    }

    /// True when no trip has been folded into any keyed accumulator
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty() && self.passenger.is_empty()
    }
}
