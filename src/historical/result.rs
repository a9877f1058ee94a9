//! Output structures for historical simulations

use std::io::Write;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Display label for a chart point, e.g. `21 oct 25`
pub fn format_chart_label(date: NaiveDate) -> String {
    format!(
        "{:02} {} {:02}",
        date.day(),
        MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}

/// A single point of the simulated window, ready for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub label: String,
    pub price: f64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            label: format_chart_label(date),
            price,
        }
    }
}

/// Complete historical simulation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSimulationResult {
    pub initial_investment: f64,

    /// Units bought at the effective start price
    pub shares: f64,

    /// Value of the shares at the effective end price
    pub final_value: f64,

    /// Net return in percent (e.g. -1.0 for -1%)
    pub net_return_pct: f64,

    /// Worst peak-to-trough decline as a fraction, always <= 0
    pub max_drawdown: f64,

    /// Annualized volatility of daily returns as a fraction, always >= 0
    pub annualized_volatility: f64,

    /// First observed date on or after the requested start
    pub start_date: NaiveDate,

    /// Last observed date on or before the requested end
    pub end_date: NaiveDate,

    pub chart: Vec<ChartPoint>,
}

impl HistoricalSimulationResult {
    /// Absolute gain or loss in currency units
    pub fn net_gain(&self) -> f64 {
        self.final_value - self.initial_investment
    }

    /// Write the chart series as CSV (`date,label,price`)
    pub fn write_chart_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for point in &self.chart {
            csv_writer.serialize(point)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_chart_labels() {
        assert_eq!(format_chart_label(d(2025, 10, 21)), "21 oct 25");
        assert_eq!(format_chart_label(d(2008, 1, 2)), "02 ene 08");
        assert_eq!(format_chart_label(d(2000, 9, 30)), "30 sept 00");
    }

    #[test]
    fn test_write_chart_csv() {
        let result = HistoricalSimulationResult {
            initial_investment: 1000.0,
            shares: 10.0,
            final_value: 1100.0,
            net_return_pct: 10.0,
            max_drawdown: 0.0,
            annualized_volatility: 0.0,
            start_date: d(2024, 1, 2),
            end_date: d(2024, 1, 3),
            chart: vec![
                ChartPoint::new(d(2024, 1, 2), 100.0),
                ChartPoint::new(d(2024, 1, 3), 110.0),
            ],
        };

        let mut buf = Vec::new();
        result.write_chart_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,label,price");
        assert_eq!(lines[1], "2024-01-02,02 ene 24,100.0");
        assert_eq!(lines.len(), 3);
        assert!((result.net_gain() - 100.0).abs() < 1e-12);
    }
}
