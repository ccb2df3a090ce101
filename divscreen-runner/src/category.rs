//! Category execution — glue between config, stores, and the screening run.

use anyhow::{Context, Result};

use divscreen_core::data::PriceProvider;

use crate::config::CategoryConfig;
use crate::progress::ScreenProgress;
use crate::run::{RunOutcome, ScreeningRun};
use crate::store;

/// Run one configured category end to end: load the ticker list and
/// prior watchlist, screen, write the result table, and atomically
/// replace the watchlist file.
pub fn run_category(
    provider: &dyn PriceProvider,
    category: &CategoryConfig,
    window_days: i64,
    progress: &dyn ScreenProgress,
) -> Result<RunOutcome> {
    let tickers = store::load_tickers(&category.ticker_file, &category.exclude)
        .with_context(|| format!("loading tickers for {}", category.name))?;
    let prior = store::load_watchlist(&category.watchlist_file)
        .with_context(|| format!("loading watchlist for {}", category.name))?;

    let run = ScreeningRun::new(provider, category.on_error).with_window_days(window_days);
    let outcome = run
        .execute(&tickers, &prior, progress)
        .with_context(|| format!("screening {}", category.name))?;

    store::write_results(&category.result_file, &outcome.rows)
        .with_context(|| format!("writing results for {}", category.name))?;
    store::save_watchlist(&category.watchlist_file, &outcome.watchlist)
        .with_context(|| format!("saving watchlist for {}", category.name))?;

    Ok(outcome)
}
