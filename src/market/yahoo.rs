// src/market/yahoo.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::market::{MarketDataProvider, MarketSnapshot};

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    result: Option<Vec<QuoteResult>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct QuoteResult {
    #[serde(rename = "assetProfile")]
    asset_profile: Option<AssetProfile>,
    #[serde(rename = "financialData")]
    financial_data: Option<FinancialData>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AssetProfile {
    sector: Option<String>,
    industry: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FinancialData {
    #[serde(rename = "currentPrice")]
    current_price: Option<RawValue>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawValue {
    raw: Option<f64>,
}

/// quoteSummary lookup: `assetProfile` for sector/industry, `financialData`
/// for the current price. Missing modules or fields stay `None`.
pub struct YahooQuoteProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooQuoteProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn snapshot_from(result: QuoteResult) -> MarketSnapshot {
        let (sector, industry) = match result.asset_profile {
            Some(p) => (p.sector, p.industry),
            None => (None, None),
        };
        let price = result
            .financial_data
            .and_then(|f| f.current_price)
            .and_then(|p| p.raw);
        MarketSnapshot {
            price,
            sector,
            industry,
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooQuoteProvider {
    async fn snapshot(&self, ticker: &str) -> Result<MarketSnapshot> {
        let url = format!(
            "{}/{}?modules=assetProfile,financialData",
            self.base_url, ticker
        );
        let envelope: QuoteSummaryEnvelope = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("querying market data for {ticker}"))?
            .error_for_status()
            .with_context(|| format!("market data lookup for {ticker} returned an error status"))?
            .json()
            .await
            .with_context(|| format!("decoding market data for {ticker}"))?;

        let result = envelope
            .quote_summary
            .result
            .and_then(|mut v| if v.is_empty() { None } else { Some(v.remove(0)) })
            .ok_or_else(|| anyhow!("empty quoteSummary result for {ticker}"))?;

        Ok(Self::snapshot_from(result))
    }

    fn name(&self) -> &'static str {
        "Yahoo"
    }
}
