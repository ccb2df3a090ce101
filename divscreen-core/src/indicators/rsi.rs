//! Relative Strength Index.
//!
//! Snapshot mode: seeded Wilder recurrence over the full change sequence
//! in chronological order — the screening path, numerically matched to
//! persisted results. A series with no losses reads 100.
//!
//! Series mode: exponentially weighted average of gains and absolute
//! losses with a `period` center of mass (alpha = 1 / (1 + period)),
//! adjust-style weights and a `period`-change warm-up — the charting
//! variant. Clamped to [0, 100].

use super::IndicatorError;
use crate::domain::PricePoint;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self { period }
    }

    /// Wilder RSI of the latest close.
    ///
    /// Seeds average gain/loss from the first `period` changes, then
    /// applies the Wilder recurrence over every remaining change.
    pub fn snapshot(&self, points: &[PricePoint]) -> Result<f64, IndicatorError> {
        let changes: Vec<f64> = points.windows(2).map(|w| w[1].close - w[0].close).collect();
        if changes.len() < self.period {
            return Err(IndicatorError::InsufficientHistory {
                indicator: "rsi",
                required: self.period + 1,
                available: points.len(),
            });
        }

        let p = self.period as f64;
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for &change in &changes[..self.period] {
            if change > 0.0 {
                avg_gain += change;
            } else {
                avg_loss -= change;
            }
        }
        avg_gain /= p;
        avg_loss /= p;

        for &change in &changes[self.period..] {
            if change > 0.0 {
                avg_gain = (avg_gain * (p - 1.0) + change) / p;
                avg_loss = (avg_loss * (p - 1.0)) / p;
            } else {
                avg_gain = (avg_gain * (p - 1.0)) / p;
                avg_loss = (avg_loss * (p - 1.0) - change) / p;
            }
        }

        Ok(rsi_from_averages(avg_gain, avg_loss))
    }

    /// EWMA RSI series for charting. NaN until `period` changes have
    /// accumulated.
    pub fn series(&self, points: &[PricePoint]) -> Vec<f64> {
        let n = points.len();
        let mut result = vec![f64::NAN; n];
        if n < 2 {
            return result;
        }

        let alpha = 1.0 / (1.0 + self.period as f64);
        let decay = 1.0 - alpha;
        let mut gain_num = 0.0;
        let mut loss_num = 0.0;
        let mut denom = 0.0;

        for i in 1..n {
            let change = points[i].close - points[i - 1].close;
            let gain = if change > 0.0 { change } else { 0.0 };
            let loss = if change < 0.0 { -change } else { 0.0 };

            // Adjust-style weighted mean: newest observation gets weight 1.
            gain_num = gain + decay * gain_num;
            loss_num = loss + decay * loss_num;
            denom = 1.0 + decay * denom;

            if i < self.period {
                continue; // warm-up
            }
            result[i] = rsi_from_averages(gain_num / denom, loss_num / denom);
        }

        result
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    let rsi = if avg_loss == 0.0 {
        // No losses in the window reads as maximal strength.
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    };
    rsi.clamp(0.0, 100.0)
}
