//! Screening run — one pass over an ordered ticker list.
//!
//! For each ticker: fetch a trailing window of daily closes, evaluate the
//! indicator snapshot, classify it, and advance the watchlist state
//! machine. The watchlist mapping is read once before the run and
//! replaced wholesale afterwards; it is the single shared mutable
//! resource, and transitions apply in ticker-iteration order.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use divscreen_core::data::{DataError, PriceProvider};
use divscreen_core::indicators::IndicatorError;
use divscreen_core::screen::{next_status, signal_count, IndicatorEngine, Watchlist};

use crate::progress::ScreenProgress;

/// What to do when a ticker cannot be fetched or evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// The first bad ticker aborts the whole batch.
    Abort,
    /// Bad tickers are flagged and skipped; the batch continues.
    Skip,
}

/// Errors from a screening run, always naming the offending ticker.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("fetch failed for {ticker}: {source}")]
    Fetch {
        ticker: String,
        #[source]
        source: DataError,
    },

    #[error("indicators failed for {ticker}: {source}")]
    Indicator {
        ticker: String,
        #[source]
        source: IndicatorError,
    },
}

impl RunError {
    pub fn ticker(&self) -> &str {
        match self {
            RunError::Fetch { ticker, .. } | RunError::Indicator { ticker, .. } => ticker,
        }
    }
}

/// One row of the append-only result table.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub ticker: String,
    pub close: f64,
    pub percent_b: f64,
    pub lower_band: f64,
    pub rsi: f64,
    /// Fractional; rendered as a percentage on output.
    pub roc: f64,
    pub signal_count: u8,
}

/// A ticker skipped under [`FailurePolicy::Skip`], with the reason.
#[derive(Debug)]
pub struct SkippedTicker {
    pub ticker: String,
    pub error: RunError,
}

/// Everything a run produces: the result rows in input order, the
/// replacement watchlist mapping, and any skipped tickers.
#[derive(Debug)]
pub struct RunOutcome {
    pub rows: Vec<ResultRow>,
    pub watchlist: Watchlist,
    pub skipped: Vec<SkippedTicker>,
}

/// Sequential screening pass over a ticker list.
pub struct ScreeningRun<'a> {
    provider: &'a dyn PriceProvider,
    engine: IndicatorEngine,
    policy: FailurePolicy,
    window_days: i64,
}

impl<'a> ScreeningRun<'a> {
    pub fn new(provider: &'a dyn PriceProvider, policy: FailurePolicy) -> Self {
        Self {
            provider,
            engine: IndicatorEngine::new(),
            policy,
            window_days: 365,
        }
    }

    /// Trailing window of daily closes to request per ticker.
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    /// Screen `tickers` in order against the `prior` watchlist state,
    /// ending the window today.
    ///
    /// The returned watchlist replaces the prior mapping entirely;
    /// entries removed during the run do not reappear. Entries for
    /// tickers outside the input list carry over untouched.
    pub fn execute(
        &self,
        tickers: &[String],
        prior: &Watchlist,
        progress: &dyn ScreenProgress,
    ) -> Result<RunOutcome, RunError> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(self.window_days);
        self.execute_range(tickers, prior, start, end, progress)
    }

    /// Same as [`execute`](Self::execute) with an explicit date range.
    pub fn execute_range(
        &self,
        tickers: &[String],
        prior: &Watchlist,
        start: NaiveDate,
        end: NaiveDate,
        progress: &dyn ScreenProgress,
    ) -> Result<RunOutcome, RunError> {
        let mut outcome = RunOutcome {
            rows: Vec::with_capacity(tickers.len()),
            watchlist: prior.clone(),
            skipped: Vec::new(),
        };

        for (index, ticker) in tickers.iter().enumerate() {
            progress.on_ticker_start(ticker, index, tickers.len());
            match self.screen_one(ticker, start, end, &mut outcome, progress) {
                Ok(()) => {}
                Err(error) => match self.policy {
                    FailurePolicy::Abort => {
                        progress.on_abort(ticker, &error);
                        return Err(error);
                    }
                    FailurePolicy::Skip => {
                        progress.on_skip(ticker, &error);
                        outcome.skipped.push(SkippedTicker {
                            ticker: ticker.clone(),
                            error,
                        });
                    }
                },
            }
        }

        progress.on_run_complete(outcome.rows.len(), outcome.skipped.len(), tickers.len());
        Ok(outcome)
    }

    fn screen_one(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        outcome: &mut RunOutcome,
        progress: &dyn ScreenProgress,
    ) -> Result<(), RunError> {
        let series = self
            .provider
            .fetch(ticker, start, end)
            .map_err(|source| RunError::Fetch {
                ticker: ticker.to_string(),
                source,
            })?;

        let snapshot = self
            .engine
            .evaluate(&series)
            .map_err(|source| RunError::Indicator {
                ticker: ticker.to_string(),
                source,
            })?;

        let count = signal_count(&snapshot);
        outcome.rows.push(ResultRow {
            ticker: ticker.to_string(),
            close: snapshot.close,
            percent_b: snapshot.percent_b,
            lower_band: snapshot.lower_band,
            rsi: snapshot.rsi,
            roc: snapshot.roc,
            signal_count: count,
        });

        // Duplicated tickers see the status their earlier occurrence wrote.
        let prior_status = outcome.watchlist.get(ticker).copied();
        match next_status(prior_status, count, snapshot.rsi) {
            Some(status) => {
                outcome.watchlist.insert(ticker.to_string(), status);
                progress.on_status(ticker, status);
            }
            None => {
                outcome.watchlist.remove(ticker);
            }
        }

        Ok(())
    }
}
