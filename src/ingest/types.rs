// src/ingest/types.rs
use anyhow::Result;
use chrono::NaiveDate;

/// One scraped row before date/time parsing: headline text plus the raw
/// stamp cell exactly as it appears on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNewsRow {
    pub headline: String,
    pub stamp: String,
}

/// One headline with its parsed date and time-of-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineRecord {
    pub ticker: String,
    pub date: NaiveDate,
    pub time: String,
    pub headline: String,
}

/// Per-ticker fetch result. Failures carry the reason instead of being
/// swallowed by control flow; the run keeps whatever succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched {
        ticker: String,
        rows: Vec<RawNewsRow>,
    },
    Failed {
        ticker: String,
        reason: String,
    },
}

impl FetchOutcome {
    pub fn ticker(&self) -> &str {
        match self {
            FetchOutcome::Fetched { ticker, .. } | FetchOutcome::Failed { ticker, .. } => ticker,
        }
    }
}

/// One quote-page fetch per ticker.
#[async_trait::async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn fetch_news(&self, ticker: &str) -> Result<Vec<RawNewsRow>>;
    fn name(&self) -> &'static str;
}
