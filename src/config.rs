// src/config.rs
// Run configuration: TOML file + env override + built-in defaults.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "TREEMAP_CONFIG_PATH";
const DEFAULT_PATH: &str = "config/treemap.toml";

/// Everything the pipeline needs that is not a run-time choice.
/// The selection flag and top-N count come from the CLI instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reference page holding the constituent table.
    pub constituents_url: String,
    /// Quote page base; the ticker is appended as `?t=<TICKER>`.
    pub news_base_url: String,
    /// Market data API base (quoteSummary-style endpoint).
    pub quote_base_url: String,
    /// Sent on every headline request; the source blocks default clients.
    pub user_agent: String,
    /// Fixed blocking delay after each headline request (success or failure).
    pub request_delay_ms: u64,
    /// Fixed-name output artifact.
    pub output_file: PathBuf,
    /// Optional cap on how many tickers to process (dev runs).
    pub max_tickers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            constituents_url: "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies"
                .to_string(),
            news_base_url: "https://finviz.com/quote.ashx".to_string(),
            quote_base_url: "https://query1.finance.yahoo.com/v10/finance/quoteSummary"
                .to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:20.0) Gecko/20100101 \
                         Firefox/20.0"
                .to_string(),
            request_delay_ms: 300,
            output_file: PathBuf::from("stock_sentiment.html"),
            max_tickers: None,
        }
    }
}

impl Config {
    /// Load from an explicit TOML path. Parse errors are fatal.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $TREEMAP_CONFIG_PATH
    /// 2) config/treemap.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::from_path(&pb);
            }
            return Err(anyhow!("TREEMAP_CONFIG_PATH points to non-existent path"));
        }
        let default_p = PathBuf::from(DEFAULT_PATH);
        if default_p.exists() {
            return Self::from_path(&default_p);
        }
        Ok(Self::default())
    }

    /// Quote page URL for one ticker.
    pub fn news_url(&self, ticker: &str) -> String {
        format!("{}?t={}", self.news_base_url, ticker)
    }
}
