//! Bollinger Bands — 20-sample SMA +/- standard deviation multiplier.
//!
//! Snapshot mode anchors on the most recent `period` closes and reports
//! %B in percentage points, matching the persisted result format (a value
//! below 0 means the close sits under the lower band). Series mode
//! computes a rolling window at every step with sample stddev, for
//! charting consumers; its %B is fractional.

use super::IndicatorError;
use crate::domain::PricePoint;

/// Band values for the latest close.
#[derive(Debug, Clone, Copy)]
pub struct BollingerSnapshot {
    /// Position of the latest close within the band, in percentage points.
    /// Not clamped; negative means below the lower band, > 100 above the upper.
    pub percent_b: f64,
    pub lower: f64,
    pub upper: f64,
    pub middle: f64,
}

/// Rolling bands over a whole series. NaN until the window fills.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    /// Fractional %B per step; NaN where the band is degenerate.
    pub percent_b: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
}

impl Bollinger {
    pub fn new(period: usize, multiplier: f64) -> Self {
        assert!(period >= 2, "Bollinger period must be >= 2");
        Self { period, multiplier }
    }

    /// %B of the latest close against a band built from the most recent
    /// `period` closes. Uses population stddev over that fixed window.
    pub fn snapshot(&self, points: &[PricePoint]) -> Result<BollingerSnapshot, IndicatorError> {
        if points.len() < self.period {
            return Err(IndicatorError::InsufficientHistory {
                indicator: "bollinger",
                required: self.period,
                available: points.len(),
            });
        }

        let window = &points[points.len() - self.period..];
        let (mean, stddev) = mean_and_std(window, self.period as f64);
        let lower = mean - self.multiplier * stddev;
        let upper = mean + self.multiplier * stddev;
        if upper == lower {
            return Err(IndicatorError::DegenerateBand);
        }

        let latest = window[window.len() - 1].close;
        Ok(BollingerSnapshot {
            percent_b: (latest - lower) / (upper - lower) * 100.0,
            lower,
            upper,
            middle: mean,
        })
    }

    /// Rolling bands at every step. Sample stddev (n-1 normalization),
    /// matching a standard rolling-window implementation.
    pub fn series(&self, points: &[PricePoint]) -> BollingerSeries {
        let n = points.len();
        let mut lower = vec![f64::NAN; n];
        let mut upper = vec![f64::NAN; n];
        let mut percent_b = vec![f64::NAN; n];

        for i in (self.period.saturating_sub(1))..n {
            let window = &points[i + 1 - self.period..=i];
            let (mean, stddev) = mean_and_std(window, (self.period - 1) as f64);
            let lo = mean - self.multiplier * stddev;
            let up = mean + self.multiplier * stddev;
            lower[i] = lo;
            upper[i] = up;
            if up != lo {
                percent_b[i] = (points[i].close - lo) / (up - lo);
            }
        }

        BollingerSeries {
            lower,
            upper,
            percent_b,
        }
    }
}

fn mean_and_std(window: &[PricePoint], variance_denominator: f64) -> (f64, f64) {
    let n = window.len() as f64;
    let mean = window.iter().map(|p| p.close).sum::<f64>() / n;
    let variance = window
        .iter()
        .map(|p| {
            let diff = p.close - mean;
            diff * diff
        })
        .sum::<f64>()
        / variance_denominator;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_points, DEFAULT_EPSILON};

    #[test]
    fn snapshot_flat_then_drop_goes_below_band() {
        // 19 flat closes then a 10% drop: latest close sits below the
        // lower band, so %B is negative.
        let mut closes = vec![100.0; 19];
        closes.push(90.0);
        let points = make_points(&closes);

        let snap = Bollinger::new(20, 2.0).snapshot(&points).unwrap();
        assert!(snap.percent_b < 0.0, "percent_b = {}", snap.percent_b);
        assert!(snap.lower < 100.0);
        assert!(snap.upper > snap.lower);
    }

    #[test]
    fn snapshot_known_values() {
        // Window [10, 11, 12]: mean 11, population std sqrt(2/3).
        let points = make_points(&[10.0, 11.0, 12.0]);
        let snap = Bollinger::new(3, 2.0).snapshot(&points).unwrap();
        let std = (2.0f64 / 3.0).sqrt();
        assert_approx(snap.middle, 11.0, DEFAULT_EPSILON);
        assert_approx(snap.lower, 11.0 - 2.0 * std, DEFAULT_EPSILON);
        assert_approx(snap.upper, 11.0 + 2.0 * std, DEFAULT_EPSILON);
        // %B of 12 inside the band, in percentage points
        let expected = (12.0 - snap.lower) / (snap.upper - snap.lower) * 100.0;
        assert_approx(snap.percent_b, expected, DEFAULT_EPSILON);
    }

    #[test]
    fn snapshot_uses_most_recent_window() {
        // Early garbage must not leak into the band: only the last 3
        // closes matter for period 3.
        let points = make_points(&[1000.0, 1000.0, 10.0, 11.0, 12.0]);
        let snap = Bollinger::new(3, 2.0).snapshot(&points).unwrap();
        assert_approx(snap.middle, 11.0, DEFAULT_EPSILON);
    }

    #[test]
    fn snapshot_insufficient_history() {
        let points = make_points(&[100.0; 19]);
        let err = Bollinger::new(20, 2.0).snapshot(&points).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::InsufficientHistory {
                indicator: "bollinger",
                required: 20,
                available: 19,
            }
        );
    }

    #[test]
    fn snapshot_degenerate_band() {
        let points = make_points(&[100.0; 20]);
        let err = Bollinger::new(20, 2.0).snapshot(&points).unwrap_err();
        assert_eq!(err, IndicatorError::DegenerateBand);
    }

    #[test]
    fn series_warmup_is_nan() {
        let points = make_points(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let series = Bollinger::new(3, 2.0).series(&points);
        assert!(series.lower[0].is_nan());
        assert!(series.lower[1].is_nan());
        assert!(!series.lower[2].is_nan());
        assert_eq!(series.lower.len(), 5);
        assert_eq!(series.upper.len(), 5);
    }

    #[test]
    fn series_uses_sample_std() {
        // Window [10, 11, 12]: sample variance 1.0, so upper - middle = 2.0.
        let points = make_points(&[10.0, 11.0, 12.0]);
        let series = Bollinger::new(3, 2.0).series(&points);
        assert_approx(series.upper[2], 11.0 + 2.0, DEFAULT_EPSILON);
        assert_approx(series.lower[2], 11.0 - 2.0, DEFAULT_EPSILON);
        // close 12 against [9, 13]: fractional %B = 0.75
        assert_approx(series.percent_b[2], 0.75, DEFAULT_EPSILON);
    }

    #[test]
    fn series_degenerate_band_is_nan_percent_b() {
        let points = make_points(&[100.0, 100.0, 100.0]);
        let series = Bollinger::new(3, 2.0).series(&points);
        assert!(series.percent_b[2].is_nan());
        assert_approx(series.lower[2], 100.0, DEFAULT_EPSILON);
    }
}
