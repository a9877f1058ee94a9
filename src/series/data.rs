//! Price observations and the ordered series built from them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date (day resolution, no time zone)
    pub date: NaiveDate,

    /// Closing price, always positive
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Daily price series sorted ascending by date
///
/// Duplicate dates are kept as separate points in source order. The series is
/// never mutated after construction, so it can be shared freely between
/// simulation calls. Deserialized input goes through `from_points`, so it is
/// sorted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from points in any order
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        // Stable sort keeps duplicate dates in source order
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Earliest observed date
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.first().map(|p| p.date)
    }

    /// Latest observed date
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.last().map(|p| p.date)
    }

    /// First point dated on or after `date`
    pub fn first_on_or_after(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date < date);
        self.points.get(idx)
    }

    /// Last point dated on or before `date`
    pub fn last_on_or_before(&self, date: NaiveDate) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date <= date);
        idx.checked_sub(1).and_then(|i| self.points.get(i))
    }

    /// All points in the closed window [start, end]
    pub fn window(&self, start: NaiveDate, end: NaiveDate) -> &[PricePoint] {
        let lo = self.points.partition_point(|p| p.date < start);
        let hi = self.points.partition_point(|p| p.date <= end);
        if lo >= hi {
            &[]
        } else {
            &self.points[lo..hi]
        }
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::from_points(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> PriceSeries {
        PriceSeries::from_points(vec![
            PricePoint::new(d(2024, 1, 5), 12.0),
            PricePoint::new(d(2024, 1, 2), 10.0),
            PricePoint::new(d(2024, 1, 3), 11.0),
            PricePoint::new(d(2024, 1, 8), 13.0),
        ])
    }

    #[test]
    fn test_from_points_sorts_by_date() {
        let series = sample();
        let dates: Vec<_> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(2024, 1, 2), d(2024, 1, 3), d(2024, 1, 5), d(2024, 1, 8)]);
        assert_eq!(series.min_date(), Some(d(2024, 1, 2)));
        assert_eq!(series.max_date(), Some(d(2024, 1, 8)));
    }

    #[test]
    fn test_duplicate_dates_keep_source_order() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2024, 1, 3), 2.0),
            PricePoint::new(d(2024, 1, 2), 1.0),
            PricePoint::new(d(2024, 1, 3), 3.0),
        ]);
        let prices: Vec<_> = series.points().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_nearest_lookups_skip_non_trading_days() {
        let series = sample();
        // Saturday 2024-01-06 resolves forward to Monday and backward to Friday
        assert_eq!(series.first_on_or_after(d(2024, 1, 6)).unwrap().date, d(2024, 1, 8));
        assert_eq!(series.last_on_or_before(d(2024, 1, 6)).unwrap().date, d(2024, 1, 5));
        assert!(series.first_on_or_after(d(2024, 2, 1)).is_none());
        assert!(series.last_on_or_before(d(2023, 12, 31)).is_none());
    }

    #[test]
    fn test_window_is_inclusive() {
        let series = sample();
        let window = series.window(d(2024, 1, 3), d(2024, 1, 5));
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].price, 11.0);
        assert_eq!(window[1].price, 12.0);
        assert!(series.window(d(2024, 1, 6), d(2024, 1, 7)).is_empty());
    }

    #[test]
    fn test_deserialize_sorts_points() {
        let json = r#"[
            {"date": "2024-01-05", "price": 2.0},
            {"date": "2024-01-02", "price": 1.0}
        ]"#;
        let series: PriceSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.min_date(), Some(d(2024, 1, 2)));
        assert_eq!(series.max_date(), Some(d(2024, 1, 5)));
        assert_eq!(series.first_on_or_after(d(2024, 1, 1)).unwrap().price, 1.0);

        // Serializes as a plain list of points
        let back = serde_json::to_string(&series).unwrap();
        assert!(back.starts_with(r#"[{"date":"2024-01-02","price":1.0}"#));
    }
}
