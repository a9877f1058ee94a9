//! Scenario runner for batches of simulations
//!
//! Loads the price series once, then runs many historical windows or
//! projections against it. The series is never mutated, so batches run in
//! parallel without locking.

use std::path::Path;

use rayon::prelude::*;

use crate::error::{Result, SimulationError};
use crate::historical::{DatePreset, DateRange, HistoricalEngine, HistoricalSimulationResult};
use crate::projection::{FutureParams, FutureSimulationResult, ProjectionEngine};
use crate::series::{load_series, parse_series, PriceSeries};

/// Pre-loaded runner over a single price series
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_path("data/historical_prices.csv")?;
/// for (preset, result) in runner.run_presets(10_000.0, &DatePreset::ALL) {
///     println!("{}: {:?}", preset, result.map(|r| r.net_return_pct));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    series: PriceSeries,
    engine: HistoricalEngine,
}

impl ScenarioRunner {
    /// Create runner over an already parsed series
    pub fn new(series: PriceSeries) -> Self {
        Self {
            series,
            engine: HistoricalEngine::default(),
        }
    }

    /// Create runner by parsing the raw feed text
    pub fn from_text(text: &str) -> Self {
        Self::new(parse_series(text))
    }

    /// Create runner by loading the feed from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_series(path)?))
    }

    /// Replace the historical engine (e.g. a different annualization basis)
    pub fn with_engine(mut self, engine: HistoricalEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Run one historical simulation
    pub fn run(
        &self,
        initial_investment: f64,
        range: DateRange,
    ) -> Result<HistoricalSimulationResult> {
        self.engine.simulate(&self.series, initial_investment, range)
    }

    /// Run one historical simulation over a preset window
    pub fn run_preset(
        &self,
        initial_investment: f64,
        preset: DatePreset,
    ) -> Result<HistoricalSimulationResult> {
        let range = preset.range_for(&self.series).ok_or_else(|| {
            SimulationError::invalid_input("series", "price series is empty")
        })?;
        self.run(initial_investment, range)
    }

    /// Run every preset in parallel, results in input order
    pub fn run_presets(
        &self,
        initial_investment: f64,
        presets: &[DatePreset],
    ) -> Vec<(DatePreset, Result<HistoricalSimulationResult>)> {
        presets
            .par_iter()
            .map(|&preset| (preset, self.run_preset(initial_investment, preset)))
            .collect()
    }

    /// Run many historical windows in parallel, results in input order
    pub fn run_ranges(
        &self,
        initial_investment: f64,
        ranges: &[DateRange],
    ) -> Vec<Result<HistoricalSimulationResult>> {
        ranges
            .par_iter()
            .map(|&range| self.run(initial_investment, range))
            .collect()
    }
}

/// Run many projections in parallel, results in input order
pub fn run_projections(params: &[FutureParams]) -> Vec<Result<FutureSimulationResult>> {
    params
        .par_iter()
        .map(|p| ProjectionEngine::new(p.clone()).map(|engine| engine.run()))
        .collect()
}
