//! Forward projection of a contribution schedule at a fixed annual rate

mod state;
mod engine;
mod breakdown;

pub use state::{ProjectionState, MONTHS_PER_YEAR};
pub use engine::{FutureParams, ProjectionEngine, MAX_YEARS};
pub use breakdown::{FutureSimulationResult, FutureYearRow, GrowthPoint};

use crate::error::Result;

/// Validate the inputs and run a projection
pub fn simulate_future(
    initial: f64,
    monthly_contribution: f64,
    years: i32,
    annual_rate_pct: f64,
) -> Result<FutureSimulationResult> {
    let params = FutureParams {
        initial,
        monthly_contribution,
        years,
        annual_rate_pct,
    };
    Ok(ProjectionEngine::new(params)?.run())
}
