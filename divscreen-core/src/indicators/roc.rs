//! Rate of Change — fractional price change versus `period` bars earlier.
//!
//! ROC = close_latest / close_period_back - 1, so -0.1 means a 10% drop.

use super::IndicatorError;
use crate::domain::PricePoint;

#[derive(Debug, Clone)]
pub struct Roc {
    period: usize,
}

impl Roc {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ROC period must be >= 1");
        Self { period }
    }

    /// ROC of the latest close. Needs `period + 1` points.
    pub fn snapshot(&self, points: &[PricePoint]) -> Result<f64, IndicatorError> {
        if points.len() < self.period + 1 {
            return Err(IndicatorError::InsufficientHistory {
                indicator: "roc",
                required: self.period + 1,
                available: points.len(),
            });
        }
        let latest = points[points.len() - 1].close;
        let past = points[points.len() - 1 - self.period].close;
        Ok(latest / past - 1.0)
    }

    /// Fractional ROC at every step for charting. NaN during warm-up and
    /// where the reference close is zero.
    pub fn series(&self, points: &[PricePoint]) -> Vec<f64> {
        let n = points.len();
        let mut result = vec![f64::NAN; n];
        for i in self.period..n {
            let past = points[i - self.period].close;
            if past != 0.0 {
                result[i] = points[i].close / past - 1.0;
            }
        }
        result
    }
}
