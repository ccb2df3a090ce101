//! CSV stores: ticker lists, result tables, and the persisted watchlist.
//!
//! The watchlist file is the sole carrier of history between runs, so it
//! is loaded once at run start and replaced atomically at run end (write
//! to a temp file, then rename) — a failed run never leaves a
//! half-written mapping behind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use divscreen_core::screen::{Watchlist, WatchlistStatus};

use crate::run::ResultRow;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("csv error at {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn csv_err(path: &Path) -> impl FnOnce(csv::Error) -> StoreError + '_ {
    move |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a ticker list. The list files are row-oriented dumps: every
/// field of every record is a symbol. Duplicates are kept; `exclude`
/// filters symbols out at load time.
pub fn load_tickers(path: &Path, exclude: &BTreeSet<String>) -> Result<Vec<String>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err(path))?;

    let mut tickers = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err(path))?;
        for field in record.iter() {
            let symbol = field.trim();
            if symbol.is_empty() || exclude.contains(symbol) {
                continue;
            }
            tickers.push(symbol.to_string());
        }
    }
    Ok(tickers)
}

/// Header of the result table.
pub const RESULT_HEADER: [&str; 7] = [
    "Ticker",
    "Close",
    "Boll Pct",
    "Lower Bound",
    "RSI",
    "ROC",
    "Count",
];

/// Write the full result table, header first.
///
/// Rounding matches the persisted format: Boll Pct and Lower Bound to 2
/// decimals, RSI and ROC (as a percentage) to 1 decimal.
pub fn write_results(path: &Path, rows: &[ResultRow]) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_err(path))?;
    writer.write_record(RESULT_HEADER).map_err(csv_err(path))?;

    for row in rows {
        writer
            .write_record(&[
                row.ticker.clone(),
                row.close.to_string(),
                format!("{:.2}", row.percent_b),
                format!("{:.2}", row.lower_band),
                format!("{:.1}", row.rsi),
                format!("{:.1}", row.roc * 100.0),
                row.signal_count.to_string(),
            ])
            .map_err(csv_err(path))?;
    }

    writer.flush().map_err(io_err(path))
}

#[derive(Debug, Serialize, Deserialize)]
struct WatchlistRecord {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Status")]
    status: WatchlistStatus,
}

/// Load the persisted watchlist. A missing file is an empty watchlist
/// (first run).
pub fn load_watchlist(path: &Path) -> Result<Watchlist, StoreError> {
    if !path.exists() {
        return Ok(Watchlist::new());
    }

    let mut reader = csv::Reader::from_path(path).map_err(csv_err(path))?;
    let mut watchlist = Watchlist::new();
    for record in reader.deserialize() {
        let record: WatchlistRecord = record.map_err(csv_err(path))?;
        watchlist.insert(record.ticker, record.status);
    }
    Ok(watchlist)
}

/// Replace the persisted watchlist atomically.
pub fn save_watchlist(path: &Path, watchlist: &Watchlist) -> Result<(), StoreError> {
    let tmp = path.with_extension("tmp");
    {
        // Header is written explicitly so an empty watchlist still
        // round-trips as a headed, empty table.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)
            .map_err(csv_err(&tmp))?;
        writer
            .write_record(["Ticker", "Status"])
            .map_err(csv_err(&tmp))?;
        for (ticker, status) in watchlist {
            writer
                .serialize(WatchlistRecord {
                    ticker: ticker.clone(),
                    status: *status,
                })
                .map_err(csv_err(&tmp))?;
        }
        writer.flush().map_err(io_err(&tmp))?;
    }
    fs::rename(&tmp, path).map_err(io_err(path))
}
