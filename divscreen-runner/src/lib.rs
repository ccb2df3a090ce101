//! Divscreen Runner — orchestration around the core screening logic.
//!
//! - Screening runs over ordered ticker lists with a selectable failure
//!   policy (abort the batch or flag-and-skip)
//! - CSV stores for ticker lists, result tables, and watchlist persistence
//! - TOML category configuration (one independent run per category)
//! - The lenient ticker checker

pub mod category;
pub mod check;
pub mod config;
pub mod progress;
pub mod run;
pub mod store;

pub use category::run_category;
pub use check::{check_tickers, check_tickers_range, CheckVerdict, TickerCheck};
pub use config::{CategoryConfig, ConfigError, ScreenConfig};
pub use progress::{ScreenProgress, SilentProgress, StdoutProgress};
pub use run::{FailurePolicy, ResultRow, RunError, RunOutcome, ScreeningRun, SkippedTicker};
pub use store::{load_tickers, load_watchlist, save_watchlist, write_results, StoreError};
