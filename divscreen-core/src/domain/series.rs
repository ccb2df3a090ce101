//! Price series — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Daily closing price for a single ticker on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Structural problems with a price series, caught at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("price series is empty")]
    Empty,

    #[error("price series dates not strictly increasing at {date}")]
    OutOfOrder { date: NaiveDate },
}

/// Chronologically ordered daily closes, oldest first.
///
/// Ordering is load-bearing for every rolling calculation downstream, so
/// it is validated exactly once here. Providers that return newest-first
/// data convert at the boundary via [`PriceSeries::from_newest_first`];
/// indicator code never re-derives ordering.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from oldest-first points.
    ///
    /// Rejects empty input and any date that is not strictly greater than
    /// its predecessor (duplicates included).
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::OutOfOrder { date: pair[1].date });
            }
        }
        Ok(Self { points })
    }

    /// Build from a newest-first sequence (some sources hand back
    /// descending dates). Reverses once, then validates as usual.
    pub fn from_newest_first(mut points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        points.reverse();
        Self::new(points)
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

    /// The most recent point. Series are non-empty by construction.
    pub fn latest(&self) -> &PricePoint {
        self.points.last().expect("series is non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, close: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            close,
        }
    }

    #[test]
    fn accepts_strictly_increasing_dates() {
        let series = PriceSeries::new(vec![point(2, 100.0), point(3, 101.0), point(4, 99.0)]);
        let series = series.unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.latest().close, 99.0);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(PriceSeries::new(vec![]).unwrap_err(), SeriesError::Empty);
    }

    #[test]
    fn rejects_duplicate_dates() {
        let err = PriceSeries::new(vec![point(2, 100.0), point(2, 101.0)]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::OutOfOrder {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
            }
        );
    }

    #[test]
    fn rejects_descending_dates() {
        assert!(PriceSeries::new(vec![point(3, 100.0), point(2, 101.0)]).is_err());
    }

    #[test]
    fn from_newest_first_reverses() {
        let series =
            PriceSeries::from_newest_first(vec![point(4, 99.0), point(3, 101.0), point(2, 100.0)])
                .unwrap();
        assert_eq!(series.points()[0].close, 100.0);
        assert_eq!(series.latest().close, 99.0);
    }
}
