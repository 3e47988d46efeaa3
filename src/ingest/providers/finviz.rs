// src/ingest/providers/finviz.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::ingest::types::{HeadlineSource, RawNewsRow};

static NEWS_TABLE_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#news-table").expect("valid selector"));
static TR_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static A_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid selector"));
static TD_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));

/// Quote-page provider. One GET per ticker against `<base>?t=<TICKER>`; the
/// source rejects default client identities, so the configured User-Agent is
/// baked into the shared `reqwest::Client`.
pub struct FinvizProvider {
    client: reqwest::Client,
    base_url: String,
}

impl FinvizProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Extract (headline, raw stamp) rows from a quote page. Rows without a
    /// link carry no headline and are skipped.
    pub fn parse_news_table(html: &str) -> Result<Vec<RawNewsRow>> {
        let doc = Html::parse_document(html);
        let table = doc
            .select(&NEWS_TABLE_SEL)
            .next()
            .ok_or_else(|| anyhow!("news-table element not found"))?;

        let mut rows = Vec::new();
        for tr in table.select(&TR_SEL) {
            let Some(link) = tr.select(&A_SEL).next() else {
                continue;
            };
            let Some(stamp_cell) = tr.select(&TD_SEL).next() else {
                continue;
            };
            let headline =
                crate::ingest::normalize_headline(&link.text().collect::<String>());
            if headline.is_empty() {
                continue;
            }
            rows.push(RawNewsRow {
                headline,
                stamp: stamp_cell.text().collect::<String>().trim().to_string(),
            });
        }
        Ok(rows)
    }
}

#[async_trait]
impl HeadlineSource for FinvizProvider {
    async fn fetch_news(&self, ticker: &str) -> Result<Vec<RawNewsRow>> {
        let url = format!("{}?t={}", self.base_url, ticker);
        let body = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("fetching quote page for {ticker}"))?
            .error_for_status()
            .with_context(|| format!("quote page for {ticker} returned an error status"))?
            .text()
            .await
            .with_context(|| format!("reading quote page body for {ticker}"))?;
        Self::parse_news_table(&body)
    }

    fn name(&self) -> &'static str {
        "Finviz"
    }
}
