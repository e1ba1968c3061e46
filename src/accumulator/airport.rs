//! Payment totals per airport fare category

use crate::models::{AirportCategory, TripRecord};
use std::collections::BTreeMap;

/// Running sums of the three money fields
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentTotals {
    pub total_amount: f64,
    pub tip_amount: f64,
    pub tolls_amount: f64,
}

impl PaymentTotals {
    fn add(&mut self, trip: &TripRecord) {
        self.total_amount += trip.total_amount;
        self.tip_amount += trip.tip_amount;
        self.tolls_amount += trip.tolls_amount;
    }
}

/// Payment totals for every airport category, all present from the start
#[derive(Debug, Clone, PartialEq)]
pub struct AirportTotals {
    totals: BTreeMap<AirportCategory, PaymentTotals>,
}

impl Default for AirportTotals {
    fn default() -> Self {
        Self::new()
    }
}

impl AirportTotals {
    pub fn new() -> Self {
        let totals = AirportCategory::ALL
            .iter()
            .map(|category| (*category, PaymentTotals::default()))
            .collect();
        Self { totals }
    }

    /// Add a trip's payments to its airport category, if its rate code maps to one
    pub fn record(&mut self, trip: &TripRecord) -> Option<AirportCategory> {
        let category = AirportCategory::from_rate_code(trip.rate_code_id)?;
        self.totals.entry(category).or_default().add(trip);
        Some(category)
    }

    pub fn get(&self, category: AirportCategory) -> PaymentTotals {
        self.totals.get(&category).copied().unwrap_or_default()
    }

    /// Totals in fixed category order
    pub fn iter(&self) -> impl Iterator<Item = (AirportCategory, PaymentTotals)> + '_ {
        AirportCategory::ALL
            .iter()
            .map(|category| (*category, self.get(*category)))
    }
}
