//! Historical back-test over a real daily price series

mod engine;
pub mod metrics;
mod range;
mod result;

pub use engine::{HistoricalConfig, HistoricalEngine, MIN_WINDOW_POINTS};
pub use range::{resolve_preset, DatePreset, DateRange, UnknownPreset};
pub use result::{format_chart_label, ChartPoint, HistoricalSimulationResult};

use chrono::NaiveDate;

use crate::error::Result;
use crate::series::PriceSeries;

/// Run a historical simulation with the default configuration
pub fn simulate_historical(
    series: &PriceSeries,
    initial_investment: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<HistoricalSimulationResult> {
    HistoricalEngine::default().simulate(series, initial_investment, DateRange::new(start, end))
}
