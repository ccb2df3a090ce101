//! Watchlist status and the per-ticker transition rules.
//!
//! The watchlist is the only state carried between runs: a mapping from
//! ticker to status, loaded once at run start and replaced wholesale at
//! run end. A ticker with no entry is simply not on the watchlist.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::classifier::RSI_BUY_THRESHOLD;

/// Persisted per-ticker status. The serialized strings are the on-disk
/// format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchlistStatus {
    #[serde(rename = "Added to watchlist")]
    AddedToWatchlist,
    #[serde(rename = "Waiting for RSI")]
    WaitingForRsi,
    #[serde(rename = "Buy")]
    Buy,
    #[serde(rename = "Investigate")]
    Investigate,
}

impl fmt::Display for WatchlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WatchlistStatus::AddedToWatchlist => "Added to watchlist",
            WatchlistStatus::WaitingForRsi => "Waiting for RSI",
            WatchlistStatus::Buy => "Buy",
            WatchlistStatus::Investigate => "Investigate",
        };
        f.write_str(label)
    }
}

/// Ticker → status mapping. BTreeMap keeps serialization deterministic.
pub type Watchlist = BTreeMap<String, WatchlistStatus>;

/// Compute a ticker's next status from its prior status, current signal
/// count, and current RSI. `None` means no entry (absent / removed).
///
/// This is a decision list evaluated top to bottom:
/// 1. three signals always (re)assert AddedToWatchlist, whatever came before;
/// 2. absent tickers below three signals never enter the table;
/// 3. a present ticker with RSI still oversold waits for RSI to recover;
/// 4. once RSI recovers, a Buy entry has served its purpose and is removed;
/// 5. zero remaining signals upgrade the entry to Buy;
/// 6. anything else still has pressure worth a look: Investigate.
pub fn next_status(
    prior: Option<WatchlistStatus>,
    signal_count: u8,
    rsi: f64,
) -> Option<WatchlistStatus> {
    use WatchlistStatus::*;

    if signal_count == 3 {
        return Some(AddedToWatchlist);
    }
    let current = prior?;
    if rsi < RSI_BUY_THRESHOLD {
        return Some(WaitingForRsi);
    }
    match current {
        Buy => None,
        _ if signal_count == 0 => Some(Buy),
        _ => Some(Investigate),
    }
}
