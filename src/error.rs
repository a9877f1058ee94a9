//! Error types for ingestion and both simulation engines

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that abort a simulation call
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Start date {start} must be before end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("No price data found between {start} and {end}")]
    NoDataInRange { start: NaiveDate, end: NaiveDate },

    #[error(
        "Not enough data to compute risk metrics: \
         {points} points in range, at least {required} required"
    )]
    InsufficientData { points: usize, required: usize },

    #[error("Failed to read price data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV output: {0}")]
    Export(#[from] csv::Error),
}

impl SimulationError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// A malformed row in the price feed. Always recovered by dropping the row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowParseError {
    #[error("row is not wrapped in quotes")]
    MissingQuotes,

    #[error("row has fewer than two fields")]
    MissingField,

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(f64),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = SimulationError::invalid_input("initial_investment", "must be a positive number");
        assert_eq!(
            err.to_string(),
            "Invalid input for initial_investment: must be a positive number"
        );
    }

    #[test]
    fn test_range_messages_include_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        let msg = SimulationError::InvalidRange { start, end }.to_string();
        assert!(msg.contains("2024-03-01"));
        assert!(msg.contains("2023-03-01"));
    }
}
