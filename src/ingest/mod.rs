// src/ingest/mod.rs
pub mod providers;
pub mod types;

use chrono::NaiveDate;
use std::time::Duration;

use crate::datetime::parse_news_stamp;
use crate::ingest::types::{FetchOutcome, HeadlineRecord, HeadlineSource};

/// Normalize headline text: entity decode, strip stray markup, collapse
/// whitespace, trim.
pub fn normalize_headline(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

/// Fetch headlines for every ticker, strictly sequentially. Each attempt is
/// followed by the same fixed delay whether it succeeded or failed (the
/// source throttles eager clients). Failures become `FetchOutcome::Failed`
/// and never abort the run.
pub async fn fetch_all(
    source: &dyn HeadlineSource,
    tickers: &[String],
    delay: Duration,
) -> Vec<FetchOutcome> {
    let mut outcomes = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        match source.fetch_news(ticker).await {
            Ok(rows) => {
                tracing::debug!(ticker = %ticker, rows = rows.len(), "fetched news rows");
                outcomes.push(FetchOutcome::Fetched {
                    ticker: ticker.clone(),
                    rows,
                });
            }
            Err(e) => {
                tracing::warn!(error = ?e, ticker = %ticker, provider = source.name(), "headline fetch failed, skipping ticker");
                outcomes.push(FetchOutcome::Failed {
                    ticker: ticker.clone(),
                    reason: e.to_string(),
                });
            }
        }
        tokio::time::sleep(delay).await;
    }
    outcomes
}

/// Turn raw fetch outcomes into parsed `HeadlineRecord`s. Failed tickers
/// contribute nothing; rows with malformed stamps are skipped, not fatal.
pub fn parse_outcomes(outcomes: &[FetchOutcome], today: NaiveDate) -> Vec<HeadlineRecord> {
    let mut records = Vec::new();
    for outcome in outcomes {
        let FetchOutcome::Fetched { ticker, rows } = outcome else {
            continue;
        };
        for row in rows {
            match parse_news_stamp(&row.stamp, today) {
                Ok((date, time)) => records.push(HeadlineRecord {
                    ticker: ticker.clone(),
                    date,
                    time,
                    headline: row.headline.clone(),
                }),
                Err(e) => {
                    tracing::debug!(error = ?e, ticker = %ticker, "skipping row with malformed stamp");
                }
            }
        }
    }
    records
}
