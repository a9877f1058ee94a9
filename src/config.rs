//! Runtime defaults, overridable through environment variables
//!
//!   FUND_DATA_PATH, DEFAULT_INITIAL_INVESTMENT, DEFAULT_FUTURE_INITIAL,
//!   DEFAULT_MONTHLY_CONTRIBUTION, DEFAULT_YEARS, DEFAULT_ANNUAL_RATE_PCT
//!
//! Missing or unparsable values fall back to the built-in defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::projection::FutureParams;

/// Default location of the price feed
pub const DEFAULT_DATA_PATH: &str = "data/historical_prices.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Price feed used by the historical simulator
    pub data_path: PathBuf,

    /// Lump sum for historical simulations
    pub initial_investment: f64,

    /// Defaults for future projections
    pub future: FutureParams,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            initial_investment: 10_000.0,
            future: FutureParams::default(),
        }
    }
}

impl SimulatorConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| parse_value(&s));

        Self {
            data_path: lookup("FUND_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            initial_investment: parsed("DEFAULT_INITIAL_INVESTMENT")
                .unwrap_or(defaults.initial_investment),
            future: FutureParams {
                initial: parsed("DEFAULT_FUTURE_INITIAL").unwrap_or(defaults.future.initial),
                monthly_contribution: parsed("DEFAULT_MONTHLY_CONTRIBUTION")
                    .unwrap_or(defaults.future.monthly_contribution),
                years: lookup("DEFAULT_YEARS")
                    .and_then(|s| parse_value(&s))
                    .unwrap_or(defaults.future.years),
                annual_rate_pct: parsed("DEFAULT_ANNUAL_RATE_PCT")
                    .unwrap_or(defaults.future.annual_rate_pct),
            },
        }
    }
}

fn parse_value<T: FromStr>(s: &str) -> Option<T> {
    s.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = SimulatorConfig::from_lookup(|_| None);
        assert_eq!(config, SimulatorConfig::default());
        assert_eq!(config.future.years, 10);
        assert_eq!(config.initial_investment, 10_000.0);
    }

    #[test]
    fn test_overrides_and_fallbacks() {
        let vars: HashMap<&str, &str> = [
            ("FUND_DATA_PATH", "/tmp/prices.csv"),
            ("DEFAULT_INITIAL_INVESTMENT", "2500"),
            ("DEFAULT_YEARS", " 25 "),
            ("DEFAULT_ANNUAL_RATE_PCT", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = SimulatorConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.data_path, PathBuf::from("/tmp/prices.csv"));
        assert_eq!(config.initial_investment, 2500.0);
        assert_eq!(config.future.years, 25);
        assert_eq!(config.future.annual_rate_pct, 7.0);
        assert_eq!(config.future.monthly_contribution, 200.0);
    }
}
