//! Progress reporting for screening runs.
//!
//! Mirrors the shape of the run itself: per-ticker start, watchlist
//! transitions, skips/aborts (always naming the ticker), and a batch
//! summary. Implementations decide where the lines go.

use divscreen_core::screen::WatchlistStatus;

use crate::run::RunError;

pub trait ScreenProgress: Send {
    /// Called when starting to screen a ticker.
    fn on_ticker_start(&self, ticker: &str, index: usize, total: usize);

    /// Called when a ticker's watchlist status is asserted.
    fn on_status(&self, ticker: &str, status: WatchlistStatus);

    /// Called when a ticker is skipped under the lenient policy.
    fn on_skip(&self, ticker: &str, error: &RunError);

    /// Called when a ticker aborts the batch under the strict policy.
    fn on_abort(&self, ticker: &str, error: &RunError);

    /// Called when the entire batch is done.
    fn on_run_complete(&self, screened: usize, skipped: usize, total: usize);
}

/// Prints progress to stdout, prefixing transitions with the category
/// name ("Champion KO is a new buy").
pub struct StdoutProgress {
    source: String,
}

impl StdoutProgress {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

impl ScreenProgress for StdoutProgress {
    fn on_ticker_start(&self, ticker: &str, index: usize, total: usize) {
        println!("[{}/{}] {ticker}", index + 1, total);
    }

    fn on_status(&self, ticker: &str, status: WatchlistStatus) {
        let source = &self.source;
        match status {
            WatchlistStatus::AddedToWatchlist => {
                println!("{ticker} added to {source} watchlist");
            }
            WatchlistStatus::WaitingForRsi => {
                println!("{source} {ticker} is waiting for RSI");
            }
            WatchlistStatus::Buy => {
                println!("{source} {ticker} is a new buy");
            }
            WatchlistStatus::Investigate => {
                println!("{source} {ticker} needs investigation");
            }
        }
    }

    fn on_skip(&self, ticker: &str, error: &RunError) {
        println!("  SKIP {ticker}: {error}");
    }

    fn on_abort(&self, ticker: &str, error: &RunError) {
        println!("  FAIL {ticker}: {error}");
    }

    fn on_run_complete(&self, screened: usize, skipped: usize, total: usize) {
        println!("\n{}: {screened}/{total} screened, {skipped} skipped", self.source);
    }
}

/// Discards everything. For tests and library callers.
pub struct SilentProgress;

impl ScreenProgress for SilentProgress {
    fn on_ticker_start(&self, _ticker: &str, _index: usize, _total: usize) {}
    fn on_status(&self, _ticker: &str, _status: WatchlistStatus) {}
    fn on_skip(&self, _ticker: &str, _error: &RunError) {}
    fn on_abort(&self, _ticker: &str, _error: &RunError) {}
    fn on_run_complete(&self, _screened: usize, _skipped: usize, _total: usize) {}
}
