//! Screening building blocks: indicator engine, signal classifier, and
//! the watchlist transition rules.

pub mod classifier;
pub mod engine;
pub mod watchlist;

pub use classifier::signal_count;
pub use engine::{IndicatorEngine, IndicatorSnapshot};
pub use watchlist::{next_status, Watchlist, WatchlistStatus};
