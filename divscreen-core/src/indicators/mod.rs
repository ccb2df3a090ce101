//! Indicator math for the screening engine.
//!
//! Each indicator offers two modes:
//! - *snapshot*: one value for the latest close over the most recent
//!   window — the screening path, numerically matched to the persisted
//!   result format.
//! - *series*: rolling values at every time step with NaN during warm-up,
//!   for charting consumers.
//!
//! All functions take `&[PricePoint]` ordered oldest-first; ordering is
//! guaranteed upstream by `PriceSeries`.

pub mod bollinger;
pub mod roc;
pub mod rsi;

pub use bollinger::{Bollinger, BollingerSeries, BollingerSnapshot};
pub use roc::Roc;
pub use rsi::Rsi;

use thiserror::Error;

/// Why an indicator could not be computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("{indicator}: need at least {required} points, have {available}")]
    InsufficientHistory {
        indicator: &'static str,
        required: usize,
        available: usize,
    },

    #[error("bollinger band has zero width (no price variation in the window)")]
    DegenerateBand,
}

#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Create price points from closes for testing, one per calendar day.
#[cfg(test)]
pub fn make_points(closes: &[f64]) -> Vec<crate::domain::PricePoint> {
    use crate::domain::PricePoint;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: base_date + chrono::Duration::days(i as i64),
            close,
        })
        .collect()
}

#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {expected}, got {actual} (epsilon {epsilon})"
    );
}
