//! Date ranges and the quick-select presets offered over a series

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::series::PriceSeries;

/// Requested simulation window (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Quick-select windows ending at the last observed date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatePreset {
    OneYear,
    ThreeYears,
    FiveYears,
    YearToDate,
    Max,
}

impl DatePreset {
    pub const ALL: [DatePreset; 5] = [
        DatePreset::OneYear,
        DatePreset::ThreeYears,
        DatePreset::FiveYears,
        DatePreset::YearToDate,
        DatePreset::Max,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DatePreset::OneYear => "1y",
            DatePreset::ThreeYears => "3y",
            DatePreset::FiveYears => "5y",
            DatePreset::YearToDate => "ytd",
            DatePreset::Max => "max",
        }
    }

    /// Window for this preset over a series, `None` when the series is empty
    pub fn range_for(&self, series: &PriceSeries) -> Option<DateRange> {
        let min = series.min_date()?;
        let max = series.max_date()?;
        Some(resolve_preset(*self, min, max))
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown date preset '{0}', expected one of 1y, 3y, 5y, ytd, max")]
pub struct UnknownPreset(pub String);

impl FromStr for DatePreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1y" => Ok(DatePreset::OneYear),
            "3y" => Ok(DatePreset::ThreeYears),
            "5y" => Ok(DatePreset::FiveYears),
            "ytd" => Ok(DatePreset::YearToDate),
            "max" => Ok(DatePreset::Max),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

/// Compute the window for a preset given the series bounds
///
/// The end is always `max`. A start that would precede `min` is clamped to it.
/// Going back N years keeps month and day; Feb 29 in a non-leap target year
/// rolls forward to Mar 1.
pub fn resolve_preset(preset: DatePreset, min: NaiveDate, max: NaiveDate) -> DateRange {
    let years_back = |n: i32| {
        let year = max.year() - n;
        NaiveDate::from_ymd_opt(year, max.month(), max.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(min)
    };

    let start = match preset {
        DatePreset::OneYear => years_back(1),
        DatePreset::ThreeYears => years_back(3),
        DatePreset::FiveYears => years_back(5),
        DatePreset::YearToDate => NaiveDate::from_ymd_opt(max.year(), 1, 1).unwrap_or(max),
        DatePreset::Max => min,
    };

    DateRange::new(start.max(min), max)
}
