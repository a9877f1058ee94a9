//! Parsing of locale-formatted numbers and dates from the price feed
//!
//! Numbers use `.` for thousands and `,` for decimals (`1.234,56`), dates are
//! `dd.mm.yyyy`.

use chrono::NaiveDate;

use crate::error::RowParseError;

/// Parse a number such as `"18,235"` (18.235) or `"1.234,56"` (1234.56)
pub fn parse_locale_number(text: &str) -> Result<f64, RowParseError> {
    let normalized = text.replace('.', "").replacen(',', ".", 1);

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RowParseError::InvalidNumber(text.to_string())),
    }
}

/// Parse a `dd.mm.yyyy` date
pub fn parse_locale_date(text: &str) -> Result<NaiveDate, RowParseError> {
    let invalid = || RowParseError::InvalidDate(text.to_string());

    let parts: Vec<&str> = text.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid());
    };

    if !is_digits(day, 1, 2) || !is_digits(month, 1, 2) || !is_digits(year, 4, 4) {
        return Err(invalid());
    }

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
