//! Screener configuration — a TOML file listing screening categories.
//!
//! Each category is an independent run with its own ticker list, result
//! table, watchlist file, and failure policy. Nothing is shared between
//! categories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::run::FailurePolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The complete screener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Trailing window of daily closes to fetch per ticker.
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    #[serde(rename = "category")]
    pub categories: Vec<CategoryConfig>,
}

fn default_window_days() -> i64 {
    365
}

/// One screening category (e.g. Champion, DailyPaycheck).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Name used in progress lines.
    pub name: String,
    pub ticker_file: PathBuf,
    pub result_file: PathBuf,
    pub watchlist_file: PathBuf,

    /// Symbols dropped from the ticker list at load time.
    #[serde(default)]
    pub exclude: BTreeSet<String>,

    #[serde(default = "default_policy")]
    pub on_error: FailurePolicy,
}

fn default_policy() -> FailurePolicy {
    FailurePolicy::Abort
}

impl ScreenConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config = ScreenConfig::from_toml(
            r#"
            [[category]]
            name = "Champion"
            ticker_file = "DividendChampion.csv"
            result_file = "ChampionResult.csv"
            watchlist_file = "ChampionWatchlist.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.window_days, 365);
        assert_eq!(config.categories.len(), 1);
        let category = &config.categories[0];
        assert_eq!(category.name, "Champion");
        assert!(category.exclude.is_empty());
        assert_eq!(category.on_error, FailurePolicy::Abort);
    }

    #[test]
    fn parses_exclusions_and_policy() {
        let config = ScreenConfig::from_toml(
            r#"
            window_days = 400

            [[category]]
            name = "Champion"
            ticker_file = "DividendChampion.csv"
            result_file = "ChampionResult.csv"
            watchlist_file = "ChampionWatchlist.csv"
            exclude = ["FMCB"]
            on_error = "skip"

            [[category]]
            name = "DailyPaycheck"
            ticker_file = "DailyPaycheck.csv"
            result_file = "PaycheckResult.csv"
            watchlist_file = "PaycheckWatchlist.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.window_days, 400);
        assert_eq!(config.categories.len(), 2);
        assert!(config.categories[0].exclude.contains("FMCB"));
        assert_eq!(config.categories[0].on_error, FailurePolicy::Skip);
        assert_eq!(config.categories[1].on_error, FailurePolicy::Abort);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ScreenConfig::from_toml("[[category]]\nname = 3").is_err());
    }
}
