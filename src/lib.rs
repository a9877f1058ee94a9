//! Fund Simulator - historical back-test and compound-growth projection engine
//!
//! This library provides:
//! - Ingestion of a locale-formatted daily price feed (`dd.mm.yyyy`, decimal comma)
//! - Historical simulation of a lump-sum investment with realized return,
//!   annualized volatility and maximum drawdown
//! - Date-range presets resolved against the available data
//! - Monthly-compounded projection of a recurring contribution schedule
//! - Batch runs over a shared, read-only series

pub mod config;
pub mod error;
pub mod series;
pub mod historical;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use error::{Result, RowParseError, SimulationError};
pub use series::{parse_series, PricePoint, PriceSeries};
pub use historical::{simulate_historical, DatePreset, DateRange, HistoricalSimulationResult};
pub use projection::{simulate_future, FutureParams, FutureSimulationResult, FutureYearRow};
pub use scenario::ScenarioRunner;
