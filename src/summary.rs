// src/summary.rs
// Join & rename: sentiment means x market snapshots -> display rows.

use std::collections::BTreeMap;

use crate::aggregate::SentimentMeans;
use crate::market::MarketSnapshot;

/// One display row per ticker that survived the join. Field names carry the
/// display renaming: `compound` becomes the Sentiment Score, `neg`/`neu`/
/// `pos` become Negative/Neutral/Positive.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSummary {
    pub ticker: String,
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub sentiment_score: f64,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub price: Option<f64>,
}

/// Inner join on ticker. A ticker present on only one side is dropped
/// silently: no headlines means no sentiment row, no market record means no
/// display row. This mirrors the upstream report exactly.
pub fn join_summaries(
    means: &BTreeMap<String, SentimentMeans>,
    market: &BTreeMap<String, MarketSnapshot>,
) -> Vec<TickerSummary> {
    let mut out = Vec::with_capacity(means.len());
    for (ticker, m) in means {
        let Some(snapshot) = market.get(ticker) else {
            continue;
        };
        out.push(TickerSummary {
            ticker: ticker.clone(),
            negative: m.neg,
            neutral: m.neu,
            positive: m.pos,
            sentiment_score: m.compound,
            sector: snapshot.sector.clone(),
            industry: snapshot.industry.clone(),
            price: snapshot.price,
        });
    }
    out
}
