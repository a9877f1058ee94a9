//! Load a price series from the quoted two-column feed
//!
//! Each data line looks like `"21.10.2025","18,235"`. The first line is a
//! header and is always dropped. Malformed rows are skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};

use super::data::{PricePoint, PriceSeries};
use super::locale::{parse_locale_date, parse_locale_number};
use crate::error::{Result, RowParseError};

/// Separator between the quoted date and price fields
const FIELD_DELIMITER: &str = "\",\"";

/// Parse a single data line into a price point
pub fn parse_row(line: &str) -> std::result::Result<PricePoint, RowParseError> {
    let inner = line
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(RowParseError::MissingQuotes)?;

    let mut fields = inner.split(FIELD_DELIMITER);
    let (Some(date_text), Some(price_text)) = (fields.next(), fields.next()) else {
        return Err(RowParseError::MissingField);
    };

    let date = parse_locale_date(date_text)?;
    let price = parse_locale_number(price_text)?;
    if price <= 0.0 {
        return Err(RowParseError::NonPositivePrice(price));
    }

    Ok(PricePoint::new(date, price))
}

/// Parse a whole feed into a series sorted ascending by date
///
/// Never fails: empty input or input with no valid rows yields an empty series.
pub fn parse_series(text: &str) -> PriceSeries {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return PriceSeries::default();
    }

    let mut points = Vec::new();
    let mut skipped = 0usize;

    // Line numbers are 1-based and count the header
    for (idx, line) in trimmed.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Ok(point) => points.push(point),
            Err(e) => {
                skipped += 1;
                warn!("Skipping invalid line {}: {} ({})", idx + 1, line, e);
            }
        }
    }

    info!("Parsed {} price points ({} rows skipped)", points.len(), skipped);
    PriceSeries::from_points(points)
}

/// Load a series from any reader (e.g., string buffer, embedded asset)
pub fn load_series_from_reader<R: Read>(mut reader: R) -> Result<PriceSeries> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_series(&text))
}

/// Load a series from a file on disk
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
    let file = File::open(path.as_ref())?;
    load_series_from_reader(file)
}
