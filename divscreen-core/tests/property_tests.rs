//! Property tests for indicator and watchlist invariants.
//!
//! Uses proptest to verify:
//! 1. RSI stays in [0, 100] for any price series
//! 2. Signal counts stay in {0, 1, 2, 3} and adding a qualifying signal
//!    never decreases the count
//! 3. Absent tickers below three signals never gain a watchlist entry
//! 4. Buy entries are removed once RSI recovers and signals subside

use proptest::prelude::*;
use divscreen_core::domain::PricePoint;
use divscreen_core::indicators::Rsi;
use divscreen_core::screen::{next_status, signal_count, IndicatorSnapshot, WatchlistStatus};

fn make_points(closes: &[f64]) -> Vec<PricePoint> {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: base + chrono::Duration::days(i as i64),
            close,
        })
        .collect()
}

fn snapshot(percent_b: f64, rsi: f64, roc: f64) -> IndicatorSnapshot {
    IndicatorSnapshot {
        close: 100.0,
        percent_b,
        lower_band: 90.0,
        rsi,
        roc,
    }
}

fn arb_status() -> impl Strategy<Value = Option<WatchlistStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(WatchlistStatus::AddedToWatchlist)),
        Just(Some(WatchlistStatus::WaitingForRsi)),
        Just(Some(WatchlistStatus::Buy)),
        Just(Some(WatchlistStatus::Investigate)),
    ]
}

// ── 1. RSI bounds ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rsi_snapshot_bounded(closes in prop::collection::vec(1.0..500.0f64, 15..80)) {
        let rsi = Rsi::new(14).snapshot(&make_points(&closes)).unwrap();
        prop_assert!((0.0..=100.0).contains(&rsi), "rsi = {rsi}");
    }

    #[test]
    fn rsi_series_bounded(closes in prop::collection::vec(1.0..500.0f64, 15..80)) {
        for value in Rsi::new(14).series(&make_points(&closes)) {
            if !value.is_nan() {
                prop_assert!((0.0..=100.0).contains(&value), "value = {value}");
            }
        }
    }
}

// ── 2. Classifier range and monotonicity ─────────────────────────────

proptest! {
    #[test]
    fn signal_count_bounded(
        percent_b in -300.0..300.0f64,
        rsi in 0.0..100.0f64,
        roc in -1.0..1.0f64,
    ) {
        prop_assert!(signal_count(&snapshot(percent_b, rsi, roc)) <= 3);
    }

    /// Forcing any one indicator to a qualifying value never lowers the count.
    #[test]
    fn signal_count_monotone(
        percent_b in -300.0..300.0f64,
        rsi in 0.0..100.0f64,
        roc in -1.0..1.0f64,
    ) {
        let base = signal_count(&snapshot(percent_b, rsi, roc));
        prop_assert!(signal_count(&snapshot(-1.0, rsi, roc)) >= base
            || percent_b < 0.0);
        prop_assert!(signal_count(&snapshot(percent_b, 10.0, roc)) >= base
            || rsi < 30.0);
        prop_assert!(signal_count(&snapshot(percent_b, rsi, -0.5)) >= base
            || roc < -0.10);
    }
}

// ── 3 & 4. Watchlist transition invariants ───────────────────────────

proptest! {
    #[test]
    fn absent_never_enters_below_three(count in 0u8..3, rsi in 0.0..100.0f64) {
        prop_assert_eq!(next_status(None, count, rsi), None);
    }

    #[test]
    fn three_signals_always_added(prior in arb_status(), rsi in 0.0..100.0f64) {
        prop_assert_eq!(
            next_status(prior, 3, rsi),
            Some(WatchlistStatus::AddedToWatchlist)
        );
    }

    #[test]
    fn recovered_buy_always_removed(count in 0u8..3, rsi in 30.0..100.0f64) {
        prop_assert_eq!(next_status(Some(WatchlistStatus::Buy), count, rsi), None);
    }

    /// The machine only ever emits the four statuses or removal; a present
    /// ticker with oversold RSI and fewer than three signals always waits.
    #[test]
    fn oversold_present_ticker_waits(prior in arb_status(), count in 0u8..3, rsi in 0.0..29.99f64) {
        if prior.is_some() {
            prop_assert_eq!(next_status(prior, count, rsi), Some(WatchlistStatus::WaitingForRsi));
        }
    }
}
