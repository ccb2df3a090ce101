//! Signal classifier — counts how many indicators read oversold.
//!
//! Thresholds are fixed, not configuration: %B below the lower band,
//! RSI under 30, ROC below -10%.

use super::engine::IndicatorSnapshot;

pub const BOLLINGER_BUY_THRESHOLD: f64 = 0.0;
pub const RSI_BUY_THRESHOLD: f64 = 30.0;
pub const ROC_BUY_THRESHOLD: f64 = -0.10;

/// Number of indicators currently favoring a buy, 0 through 3.
pub fn signal_count(snapshot: &IndicatorSnapshot) -> u8 {
    let mut count = 0;
    if snapshot.percent_b < BOLLINGER_BUY_THRESHOLD {
        count += 1;
    }
    if snapshot.rsi < RSI_BUY_THRESHOLD {
        count += 1;
    }
    if snapshot.roc < ROC_BUY_THRESHOLD {
        count += 1;
    }
    count
}
