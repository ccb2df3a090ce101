//! Lenient ticker checker — classifies why screening would reject a ticker.
//!
//! Used to audit the bad-ticker list: a ticker that fetches and computes
//! cleanly is safe to screen again and can be removed from the list.
//! Every ticker is checked independently; the batch never aborts.

use chrono::{Duration, NaiveDate, Utc};
use std::fmt;

use divscreen_core::data::{DataError, PriceProvider};
use divscreen_core::indicators::IndicatorError;
use divscreen_core::screen::IndicatorEngine;

/// Verdict for one checked ticker.
#[derive(Debug)]
pub enum CheckVerdict {
    /// Fetches and computes cleanly.
    Healthy,
    FetchFailed(DataError),
    IndicatorFailed(IndicatorError),
}

impl fmt::Display for CheckVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckVerdict::Healthy => f.write_str("good ticker; remove from the bad-ticker list"),
            CheckVerdict::FetchFailed(e) => write!(f, "fetch failed: {e}"),
            CheckVerdict::IndicatorFailed(e) => write!(f, "history unusable: {e}"),
        }
    }
}

#[derive(Debug)]
pub struct TickerCheck {
    pub ticker: String,
    pub verdict: CheckVerdict,
}

impl TickerCheck {
    pub fn is_healthy(&self) -> bool {
        matches!(self.verdict, CheckVerdict::Healthy)
    }
}

/// Check each ticker over a trailing window ending today.
pub fn check_tickers(
    tickers: &[String],
    provider: &dyn PriceProvider,
    window_days: i64,
) -> Vec<TickerCheck> {
    let end = Utc::now().date_naive();
    let start = end - Duration::days(window_days);
    check_tickers_range(tickers, provider, start, end)
}

/// Check each ticker over an explicit date range.
///
/// The checks share the screening engine's thresholds: whatever the
/// engine would reject, the checker reports, and nothing else.
pub fn check_tickers_range(
    tickers: &[String],
    provider: &dyn PriceProvider,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<TickerCheck> {
    let engine = IndicatorEngine::new();
    tickers
        .iter()
        .map(|ticker| {
            let verdict = match provider.fetch(ticker, start, end) {
                Err(error) => CheckVerdict::FetchFailed(error),
                Ok(series) => match engine.evaluate(&series) {
                    Ok(_) => CheckVerdict::Healthy,
                    Err(error) => CheckVerdict::IndicatorFailed(error),
                },
            };
            TickerCheck {
                ticker: ticker.clone(),
                verdict,
            }
        })
        .collect()
}
