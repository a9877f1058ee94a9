//! Output structures for future projections

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::state::MONTHS_PER_YEAR;
use crate::error::Result;

/// One projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureYearRow {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Equals the previous row's ending balance (the initial amount for year 1)
    pub starting_balance: f64,

    /// Twelve monthly contributions
    pub contributions: f64,

    /// Interest earned during the year
    pub gains: f64,

    pub ending_balance: f64,
}

/// Cumulative view of the projection at a year boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Year index, 0 for the opening anchor
    pub year: u32,

    /// Initial amount plus all contributions so far
    pub total_invested: f64,

    /// Balance minus total invested
    pub gains: f64,

    pub balance: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureSimulationResult {
    pub final_value: f64,

    /// Initial amount plus every monthly contribution
    pub total_contributed: f64,

    pub total_gains: f64,

    /// Per-year rows
    pub breakdown: Vec<FutureYearRow>,

    /// Year-0 anchor followed by one point per year
    pub growth: Vec<GrowthPoint>,
}

impl FutureSimulationResult {
    /// Write the yearly breakdown as CSV
    pub fn write_breakdown_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.breakdown {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Build the cumulative series from the yearly rows
pub(crate) fn growth_series(
    initial: f64,
    monthly_contribution: f64,
    rows: &[FutureYearRow],
) -> Vec<GrowthPoint> {
    let anchor = GrowthPoint {
        year: 0,
        total_invested: initial,
        gains: 0.0,
        balance: initial,
    };

    std::iter::once(anchor)
        .chain(rows.iter().map(|row| {
            let months = MONTHS_PER_YEAR as f64 * row.year as f64;
            let total_invested = initial + monthly_contribution * months;
            GrowthPoint {
                year: row.year,
                total_invested,
                gains: row.ending_balance - total_invested,
                balance: row.ending_balance,
            }
        }))
        .collect()
}
