//! Divscreen CLI — dividend ticker screening commands.
//!
//! Commands:
//! - `screen` — screen ticker lists against Bollinger %B, RSI, and rate
//!   of change, append result tables, and update per-category watchlists
//! - `check` — audit a suspect ticker list and report why each ticker
//!   fails (or that it is healthy again)

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;

use divscreen_core::data::YahooProvider;
use divscreen_runner::{
    check_tickers, load_tickers, run_category, CategoryConfig, FailurePolicy, ScreenConfig,
    StdoutProgress,
};

#[derive(Parser)]
#[command(
    name = "divscreen",
    about = "Dividend ticker screener — Bollinger %B, RSI, and rate of change"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen ticker lists and update watchlists.
    Screen {
        /// TOML config with one or more screening categories.
        #[arg(long, conflicts_with_all = ["tickers", "results", "watchlist"])]
        config: Option<PathBuf>,

        /// Ticker list CSV (ad-hoc single category; requires --results and --watchlist).
        #[arg(long)]
        tickers: Option<PathBuf>,

        /// Result table CSV to write.
        #[arg(long)]
        results: Option<PathBuf>,

        /// Watchlist CSV to read and replace.
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Category name used in progress lines.
        #[arg(long, default_value = "Screen")]
        source: String,

        /// Skip bad tickers instead of aborting the batch.
        #[arg(long, default_value_t = false)]
        skip_failures: bool,

        /// Trailing window of daily closes to fetch per ticker.
        #[arg(long, default_value_t = 365)]
        days: i64,

        /// Symbols to exclude from the ticker list.
        #[arg(long)]
        exclude: Vec<String>,
    },
    /// Check each ticker in a suspect list and report a verdict.
    Check {
        /// Ticker list CSV to audit.
        #[arg(long)]
        tickers: PathBuf,

        /// Trailing window of daily closes to fetch per ticker.
        #[arg(long, default_value_t = 365)]
        days: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            config,
            tickers,
            results,
            watchlist,
            source,
            skip_failures,
            days,
            exclude,
        } => run_screen(
            config,
            tickers,
            results,
            watchlist,
            source,
            skip_failures,
            days,
            exclude,
        ),
        Commands::Check { tickers, days } => run_check(tickers, days),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_screen(
    config: Option<PathBuf>,
    tickers: Option<PathBuf>,
    results: Option<PathBuf>,
    watchlist: Option<PathBuf>,
    source: String,
    skip_failures: bool,
    days: i64,
    exclude: Vec<String>,
) -> Result<()> {
    let config = match config {
        Some(path) => ScreenConfig::from_file(&path)?,
        None => {
            let (Some(ticker_file), Some(result_file), Some(watchlist_file)) =
                (tickers, results, watchlist)
            else {
                bail!("either --config or all of --tickers, --results, and --watchlist are required");
            };
            ScreenConfig {
                window_days: days,
                categories: vec![CategoryConfig {
                    name: source,
                    ticker_file,
                    result_file,
                    watchlist_file,
                    exclude: exclude.into_iter().collect(),
                    on_error: if skip_failures {
                        FailurePolicy::Skip
                    } else {
                        FailurePolicy::Abort
                    },
                }],
            }
        }
    };

    let provider = YahooProvider::new();
    for category in &config.categories {
        let progress = StdoutProgress::new(&category.name);
        run_category(&provider, category, config.window_days, &progress)?;
    }
    Ok(())
}

fn run_check(path: PathBuf, days: i64) -> Result<()> {
    let provider = YahooProvider::new();
    let tickers = load_tickers(&path, &BTreeSet::new())?;
    if tickers.is_empty() {
        bail!("no tickers found in {}", path.display());
    }

    let report = check_tickers(&tickers, &provider, days);
    for check in &report {
        println!("  {}: {}", check.ticker, check.verdict);
    }

    let healthy = report.iter().filter(|check| check.is_healthy()).count();
    println!("\n{healthy}/{} tickers are screenable", report.len());
    Ok(())
}
