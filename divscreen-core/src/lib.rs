//! Divscreen Core — price series, indicator math, and watchlist rules.
//!
//! This crate contains the numerically sensitive heart of the screener:
//! - Domain types (price points, validated oldest-first series)
//! - Bollinger %B, Wilder RSI, and rate-of-change indicators
//! - Signal classification (0-3 oversold count)
//! - The watchlist state machine applied across screening runs
//! - Data provider trait and the Yahoo Finance implementation

pub mod data;
pub mod domain;
pub mod indicators;
pub mod screen;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the types handed across the fetch/screen seam
    /// are Send + Sync, so callers may fetch concurrently if they choose.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PricePoint>();
        require_sync::<domain::PricePoint>();
        require_send::<domain::PriceSeries>();
        require_sync::<domain::PriceSeries>();
        require_send::<screen::IndicatorSnapshot>();
        require_sync::<screen::IndicatorSnapshot>();
        require_send::<screen::WatchlistStatus>();
        require_sync::<screen::WatchlistStatus>();
        require_send::<data::DataError>();
        require_sync::<data::DataError>();
    }
}
