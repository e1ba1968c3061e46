//! Conversion of accumulator state into report rows

use super::Report;
use crate::accumulator::AccumulatorSet;
use crate::constants::AVERAGE_DECIMAL_PLACES;
use crate::models::{AirportAmountsRow, DistanceSummaryRow, PassengerAverageRow};
use tracing::debug;

/// Rows of all three reports for one run
#[derive(Debug, Clone, PartialEq)]
pub struct FinalReports {
    pub distance: Report<DistanceSummaryRow>,
    pub airport: Report<AirportAmountsRow>,
    pub passenger: Report<PassengerAverageRow>,
}

/// Finalize the accumulators of a completed run
pub fn finalize(accumulators: &AccumulatorSet) -> FinalReports {
    let distance: Vec<_> = accumulators
        .distance
        .iter()
        .map(|((date, time_of_day), range)| DistanceSummaryRow {
            date: *date,
            time_of_day: *time_of_day,
            shortest_distance: range.shortest,
            longest_distance: range.longest,
        })
        .collect();

    let airport: Vec<_> = accumulators
        .airport
        .iter()
        .map(|(category, totals)| AirportAmountsRow {
            category,
            total_amount: totals.total_amount,
            tip_amount: totals.tip_amount,
            tolls_amount: totals.tolls_amount,
        })
        .collect();

    let passenger: Vec<_> = accumulators
        .passenger
        .iter()
        .filter_map(|(date, location, tally)| {
            tally.average().map(|average| PassengerAverageRow {
                date,
                pickup_location_id: location.to_string(),
                average_passenger_count: round_to(average, AVERAGE_DECIMAL_PLACES),
            })
        })
        .collect();

    debug!(
        "Finalized {} distance rows, {} airport rows, {} passenger rows",
        distance.len(),
        airport.len(),
        passenger.len()
    );

    FinalReports {
        distance: Report::from_rows(distance),
        airport: Report::from_rows(airport),
        passenger: Report::from_rows(passenger),
    }
}

/// Round to the given number of decimal places
///
/// Rounding works on the exact binary value, so `0.025` (stored just above
/// the tie) becomes `0.03`. Only exact binary ties go to the even digit.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
