// src/market/mod.rs
pub mod yahoo;

pub use yahoo::YahooQuoteProvider;

use anyhow::Result;
use std::collections::BTreeMap;

/// Live fields for one ticker. Any field the provider could not supply is
/// `None`; the ticker itself is always retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSnapshot {
    pub price: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
}

/// One lookup per ticker against an external market-data provider.
#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn snapshot(&self, ticker: &str) -> Result<MarketSnapshot>;
    fn name(&self) -> &'static str;
}

/// Enrich every ticker, strictly sequentially, no retry and no delay. A
/// failed lookup degrades to an all-`None` snapshot rather than dropping the
/// ticker or aborting the run.
pub async fn enrich_all(
    provider: &dyn MarketDataProvider,
    tickers: &[String],
) -> BTreeMap<String, MarketSnapshot> {
    let mut out = BTreeMap::new();
    for ticker in tickers {
        let snapshot = match provider.snapshot(ticker).await {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(error = ?e, ticker = %ticker, provider = provider.name(), "market lookup failed, keeping ticker with empty fields");
                MarketSnapshot::default()
            }
        };
        out.insert(ticker.clone(), snapshot);
    }
    out
}
