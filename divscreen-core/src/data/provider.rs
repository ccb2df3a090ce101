//! Price provider trait and structured fetch errors.
//!
//! The PriceProvider trait abstracts over market-data sources so the
//! screening run can be driven by the real Yahoo provider or a mock in
//! tests. Providers must signal failure for unknown or delisted tickers
//! rather than returning garbage.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{PriceSeries, SeriesError};

/// Structured error types for fetch operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("ticker not found: {ticker}")]
    TickerNotFound { ticker: String },

    #[error("invalid series for {ticker}: {source}")]
    InvalidSeries {
        ticker: String,
        #[source]
        source: SeriesError,
    },

    #[error("data error: {0}")]
    Other(String),
}

/// Supplies trailing daily closes for a ticker over a date range.
///
/// Implementations return oldest-first series; the one ordering
/// conversion lives inside the provider, at the external boundary.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily closes for `ticker` between `start` and `end` inclusive.
    fn fetch(&self, ticker: &str, start: NaiveDate, end: NaiveDate)
        -> Result<PriceSeries, DataError>;
}
