//! Back-test of a lump-sum investment over an observed price window

use log::debug;

use super::metrics::{annualized_volatility, daily_returns, max_drawdown, TRADING_DAYS_PER_YEAR};
use super::range::DateRange;
use super::result::{ChartPoint, HistoricalSimulationResult};
use crate::error::{Result, SimulationError};
use crate::series::PriceSeries;

/// Minimum points in the resolved window; volatility needs two daily returns
pub const MIN_WINDOW_POINTS: usize = 3;

/// Configuration for historical simulations
#[derive(Debug, Clone)]
pub struct HistoricalConfig {
    /// Trading days used to annualize daily volatility
    pub trading_days_per_year: f64,
}

impl Default for HistoricalConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

/// Historical simulation engine
#[derive(Debug, Clone, Default)]
pub struct HistoricalEngine {
    config: HistoricalConfig,
}

impl HistoricalEngine {
    pub fn new(config: HistoricalConfig) -> Self {
        Self { config }
    }

    /// Simulate buying at the first observed price on or after `range.start`
    /// and holding until the last observed price on or before `range.end`
    pub fn simulate(
        &self,
        series: &PriceSeries,
        initial_investment: f64,
        range: DateRange,
    ) -> Result<HistoricalSimulationResult> {
        if !initial_investment.is_finite() || initial_investment <= 0.0 {
            return Err(SimulationError::invalid_input(
                "initial_investment",
                format!("must be a positive number, got {}", initial_investment),
            ));
        }

        if range.start >= range.end {
            return Err(SimulationError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }

        // Resolve to real trading days instead of interpolating
        let no_data = || SimulationError::NoDataInRange {
            start: range.start,
            end: range.end,
        };
        let start_point = series.first_on_or_after(range.start).ok_or_else(no_data)?;
        let end_point = series.last_on_or_before(range.end).ok_or_else(no_data)?;

        let window = series.window(start_point.date, end_point.date);
        if window.len() < MIN_WINDOW_POINTS {
            return Err(SimulationError::InsufficientData {
                points: window.len(),
                required: MIN_WINDOW_POINTS,
            });
        }

        debug!(
            "Requested {} to {}, resolved {} to {} ({} points)",
            range.start,
            range.end,
            start_point.date,
            end_point.date,
            window.len()
        );

        let returns = daily_returns(window);
        // At least two returns after the window check, so this never fails
        let volatility = annualized_volatility(&returns, self.config.trading_days_per_year)
            .ok_or(SimulationError::InsufficientData {
                points: window.len(),
                required: MIN_WINDOW_POINTS,
            })?;
        let drawdown = max_drawdown(window);

        let shares = initial_investment / start_point.price;
        let final_value = shares * end_point.price;
        let net_return_pct = (final_value - initial_investment) / initial_investment * 100.0;

        let chart = window
            .iter()
            .map(|p| ChartPoint::new(p.date, p.price))
            .collect();

        Ok(HistoricalSimulationResult {
            initial_investment,
            shares,
            final_value,
            net_return_pct,
            max_drawdown: drawdown,
            annualized_volatility: volatility,
            start_date: start_point.date,
            end_date: end_point.date,
            chart,
        })
    }
}
