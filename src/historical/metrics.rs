//! Return, volatility and drawdown statistics over a price window

use crate::series::PricePoint;

/// Trading days used to annualize daily volatility
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Simple returns between consecutive points: `p[i] / p[i-1] - 1`
pub fn daily_returns(points: &[PricePoint]) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| pair[1].price / pair[0].price - 1.0)
        .collect()
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with Bessel's correction (divisor `n - 1`)
///
/// Requires at least two observations. With exactly two the divisor is 1,
/// which is valid but gives a very weak estimate of the spread.
///
/// Identical values give zero only when their mean is exact in `f64`;
/// otherwise rounding leaves a tiny positive result (around 1e-16 for 0.1).
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Daily standard deviation scaled by `sqrt(trading_days_per_year)`
pub fn annualized_volatility(daily_returns: &[f64], trading_days_per_year: f64) -> Option<f64> {
    sample_std_dev(daily_returns).map(|sd| sd * trading_days_per_year.sqrt())
}

/// Most negative peak-to-current decline, as a fraction of the running peak
///
/// Always `<= 0`; exactly zero when prices never fall.
pub fn max_drawdown(points: &[PricePoint]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;

    for point in points {
        peak = peak.max(point.price);
        let drawdown = (point.price - peak) / peak;
        worst = worst.min(drawdown);
    }

    worst
}
