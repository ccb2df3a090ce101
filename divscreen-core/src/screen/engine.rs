//! Indicator engine — one snapshot per ticker for the screening pass.
//!
//! Pure function of the supplied series; holds no state across tickers.
//! Recovery policy for short histories: RSI falls back to 100 and ROC to
//! 0 (both neutral, no signal), while Bollinger problems are fatal for
//! the ticker and surface to the failure policy upstream.

use crate::domain::PriceSeries;
use crate::indicators::{Bollinger, IndicatorError, Roc, Rsi};

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_WIDTH: f64 = 2.0;
pub const RSI_PERIOD: usize = 14;
pub const ROC_PERIOD: usize = 12;

/// Per-ticker indicator values for the latest close.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSnapshot {
    pub close: f64,
    /// %B in percentage points; negative means below the lower band.
    pub percent_b: f64,
    pub lower_band: f64,
    /// Clamped to [0, 100]. 100 when the history is too short to seed Wilder.
    pub rsi: f64,
    /// Fractional. 0 when the history is too short (neutral, no signal).
    pub roc: f64,
}

#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    bollinger: Bollinger,
    rsi: Rsi,
    roc: Roc,
}

impl IndicatorEngine {
    /// Engine with the standard screening periods: Bollinger 20/2.0,
    /// RSI 14, ROC 12.
    pub fn new() -> Self {
        Self::with_periods(BOLLINGER_PERIOD, BOLLINGER_WIDTH, RSI_PERIOD, ROC_PERIOD)
    }

    pub fn with_periods(
        bollinger_period: usize,
        bollinger_width: f64,
        rsi_period: usize,
        roc_period: usize,
    ) -> Self {
        Self {
            bollinger: Bollinger::new(bollinger_period, bollinger_width),
            rsi: Rsi::new(rsi_period),
            roc: Roc::new(roc_period),
        }
    }

    /// Evaluate the latest close of `series`.
    pub fn evaluate(&self, series: &PriceSeries) -> Result<IndicatorSnapshot, IndicatorError> {
        let points = series.points();

        let band = self.bollinger.snapshot(points)?;

        let rsi = match self.rsi.snapshot(points) {
            Ok(value) => value,
            Err(IndicatorError::InsufficientHistory { .. }) => 100.0,
            Err(other) => return Err(other),
        };

        let roc = match self.roc.snapshot(points) {
            Ok(value) => value,
            Err(IndicatorError::InsufficientHistory { .. }) => 0.0,
            Err(other) => return Err(other),
        };

        Ok(IndicatorSnapshot {
            close: series.latest().close,
            percent_b: band.percent_b,
            lower_band: band.lower,
            rsi,
            roc,
        })
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
