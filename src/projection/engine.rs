//! Compound-growth projection of a recurring contribution schedule

use log::debug;
use serde::{Deserialize, Serialize};

use super::breakdown::{growth_series, FutureSimulationResult, FutureYearRow};
use super::state::{ProjectionState, MONTHS_PER_YEAR};
use crate::error::{Result, SimulationError};

/// Longest projection accepted, in years
pub const MAX_YEARS: i32 = 1000;

/// Inputs for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureParams {
    /// Opening lump sum
    pub initial: f64,

    /// Amount added at the end of every month
    pub monthly_contribution: f64,

    /// Number of projection years
    pub years: i32,

    /// Assumed annual rate in percent (7.0 for 7%), may be negative
    pub annual_rate_pct: f64,
}

impl Default for FutureParams {
    fn default() -> Self {
        Self {
            initial: 1000.0,
            monthly_contribution: 200.0,
            years: 10,
            annual_rate_pct: 7.0,
        }
    }
}

impl FutureParams {
    /// Check every field, reporting the first offending one
    pub fn validate(&self) -> Result<()> {
        if !self.initial.is_finite() || self.initial < 0.0 {
            return Err(SimulationError::invalid_input(
                "initial",
                format!("must be a non-negative number, got {}", self.initial),
            ));
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(SimulationError::invalid_input(
                "monthly_contribution",
                format!("must be a non-negative number, got {}", self.monthly_contribution),
            ));
        }
        if self.years <= 0 || self.years > MAX_YEARS {
            return Err(SimulationError::invalid_input(
                "years",
                format!("must be a whole number from 1 to {}, got {}", MAX_YEARS, self.years),
            ));
        }
        if !self.annual_rate_pct.is_finite() {
            return Err(SimulationError::invalid_input(
                "annual_rate_pct",
                format!("must be a number, got {}", self.annual_rate_pct),
            ));
        }
        Ok(())
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / MONTHS_PER_YEAR as f64
    }
}

/// Projection engine over validated parameters
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: FutureParams,
}

impl ProjectionEngine {
    /// Create an engine, rejecting invalid parameters
    pub fn new(params: FutureParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Compound monthly and collect one row per year
    pub fn run(&self) -> FutureSimulationResult {
        let params = &self.params;
        let monthly_rate = params.monthly_rate();
        let annual_contribution = params.monthly_contribution * MONTHS_PER_YEAR as f64;
        let total_months = params.years as u32 * MONTHS_PER_YEAR;

        let mut state = ProjectionState::new(params.initial);
        let mut breakdown = Vec::with_capacity(params.years as usize);

        for _month in 1..=total_months {
            state.advance_month(monthly_rate, params.monthly_contribution);

            if state.is_year_end() {
                breakdown.push(FutureYearRow {
                    year: state.year,
                    starting_balance: state.year_start_balance,
                    contributions: annual_contribution,
                    gains: state.balance - state.year_start_balance - annual_contribution,
                    ending_balance: state.balance,
                });
            }
        }

        let final_value = state.balance;
        let total_contributed = params.initial + annual_contribution * params.years as f64;
        let growth = growth_series(params.initial, params.monthly_contribution, &breakdown);

        debug!(
            "Projected {} years at {}%: final {:.2}, contributed {:.2}",
            params.years, params.annual_rate_pct, final_value, total_contributed
        );

        FutureSimulationResult {
            final_value,
            total_contributed,
            total_gains: final_value - total_contributed,
            breakdown,
            growth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(initial: f64, monthly: f64, years: i32, rate: f64) -> FutureParams {
        FutureParams {
            initial,
            monthly_contribution: monthly,
            years,
            annual_rate_pct: rate,
        }
    }

    fn run(p: FutureParams) -> FutureSimulationResult {
        ProjectionEngine::new(p).unwrap().run()
    }

    #[test]
    fn test_scenario_b_zero_rate_no_contributions() {
        let result = run(params(1000.0, 0.0, 1, 0.0));
        assert_eq!(result.final_value, 1000.0);
        assert_eq!(result.total_gains, 0.0);
        assert_eq!(result.total_contributed, 1000.0);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].gains, 0.0);
    }

    #[test]
    fn test_zero_rate_accumulates_contributions() {
        let result = run(params(500.0, 100.0, 3, 0.0));
        assert_relative_eq!(result.final_value, 500.0 + 3600.0, epsilon = 1e-9);
        assert_relative_eq!(result.total_gains, 0.0, epsilon = 1e-9);
        for row in &result.breakdown {
            assert_eq!(row.contributions, 1200.0);
            assert_relative_eq!(row.gains, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_lump_sum_matches_closed_form() {
        let result = run(params(10_000.0, 0.0, 10, 6.0));
        let expected = 10_000.0 * (1.0_f64 + 0.005).powi(120);
        assert_relative_eq!(result.final_value, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_annuity_matches_closed_form() {
        // Contributions at month end: PMT * ((1 + r)^n - 1) / r
        let result = run(params(0.0, 200.0, 5, 12.0));
        let r = 0.01_f64;
        let expected = 200.0 * ((1.0 + r).powi(60) - 1.0) / r;
        assert_relative_eq!(result.final_value, expected, max_relative = 1e-10);
        assert_relative_eq!(result.total_contributed, 12_000.0);
    }

    #[test]
    fn test_rows_are_continuous() {
        let p = params(1000.0, 200.0, 10, 7.0);
        let result = run(p.clone());

        assert_eq!(result.breakdown.len(), 10);
        assert_eq!(result.breakdown[0].starting_balance, p.initial);
        for pair in result.breakdown.windows(2) {
            assert_eq!(pair[1].starting_balance, pair[0].ending_balance);
            assert_eq!(pair[1].year, pair[0].year + 1);
        }
        for row in &result.breakdown {
            assert_relative_eq!(
                row.starting_balance + row.contributions + row.gains,
                row.ending_balance,
                max_relative = 1e-12
            );
        }
        assert_eq!(result.final_value, result.breakdown[9].ending_balance);
    }

    #[test]
    fn test_growth_series_agrees_with_breakdown() {
        let result = run(params(1000.0, 200.0, 10, 7.0));

        assert_eq!(result.growth.len(), 11);
        let anchor = &result.growth[0];
        assert_eq!((anchor.year, anchor.total_invested, anchor.gains), (0, 1000.0, 0.0));

        for (point, row) in result.growth[1..].iter().zip(&result.breakdown) {
            assert_eq!(point.year, row.year);
            assert_eq!(point.balance, row.ending_balance);
            assert_relative_eq!(
                point.total_invested + point.gains,
                row.ending_balance,
                max_relative = 1e-12
            );
        }

        let last = result.growth.last().unwrap();
        assert_relative_eq!(last.total_invested, result.total_contributed);
        assert_relative_eq!(last.gains, result.total_gains, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_rate_loses_value() {
        let result = run(params(1000.0, 0.0, 2, -5.0));
        assert!(result.final_value < 1000.0);
        assert!(result.total_gains < 0.0);
        assert!(result.breakdown.iter().all(|row| row.gains < 0.0));
    }

    #[test]
    fn test_invalid_inputs_name_field() {
        let cases = [
            (params(-1.0, 0.0, 1, 5.0), "initial"),
            (params(f64::NAN, 0.0, 1, 5.0), "initial"),
            (params(0.0, -10.0, 1, 5.0), "monthly_contribution"),
            (params(0.0, 10.0, 0, 5.0), "years"),
            (params(0.0, 10.0, -3, 5.0), "years"),
            (params(0.0, 10.0, MAX_YEARS + 1, 5.0), "years"),
            (params(0.0, 10.0, 357_913_942, 5.0), "years"),
            (params(0.0, 10.0, 1, f64::NAN), "annual_rate_pct"),
            (params(0.0, 10.0, 1, f64::INFINITY), "annual_rate_pct"),
        ];
        for (p, expected) in cases {
            match ProjectionEngine::new(p) {
                Err(SimulationError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidInput for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_longest_projection_accepted() {
        let result = run(params(100.0, 10.0, MAX_YEARS, 1.0));
        assert_eq!(result.breakdown.len(), MAX_YEARS as usize);
        assert_eq!(result.growth.len(), MAX_YEARS as usize + 1);
        assert!(result.final_value.is_finite());
    }
}
