// src/pipeline.rs
// The five-stage batch run: constituents -> headlines -> scores ->
// enrichment/join -> selection/render. Strictly sequential; each stage
// consumes the previous stage's output.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::aggregate::{mean_scores, score_headlines};
use crate::config::Config;
use crate::constituents::ConstituentSource;
use crate::ingest::types::{FetchOutcome, HeadlineSource};
use crate::market::MarketDataProvider;
use crate::render::TreemapRenderer;
use crate::select::{select_top, Choice};
use crate::sentiment::PolarityScorer;
use crate::summary::join_summaries;

/// The pipeline's injected collaborators. Trait objects so tests can swap
/// any of them without touching stage logic.
pub struct Collaborators {
    pub constituents: Box<dyn ConstituentSource>,
    pub headlines: Box<dyn HeadlineSource>,
    pub market: Box<dyn MarketDataProvider>,
    pub scorer: Box<dyn PolarityScorer>,
    pub renderer: Box<dyn TreemapRenderer>,
}

/// Run the whole pipeline once. Returns the path of the written artifact.
/// Fatal at exactly two points: the constituent load and the render; every
/// per-ticker failure in between degrades to a partial result.
pub async fn run(
    cfg: &Config,
    choice: Choice,
    top_n: usize,
    collab: &Collaborators,
) -> Result<PathBuf> {
    let constituents = collab
        .constituents
        .fetch()
        .await
        .context("loading constituent list")?;
    tracing::info!(count = constituents.len(), "constituents loaded");

    let mut tickers: Vec<String> = constituents.iter().map(|c| c.ticker.clone()).collect();
    if let Some(cap) = cfg.max_tickers {
        tickers.truncate(cap);
    }

    let delay = Duration::from_millis(cfg.request_delay_ms);
    let outcomes = crate::ingest::fetch_all(collab.headlines.as_ref(), &tickers, delay).await;
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, FetchOutcome::Failed { .. }))
        .count();
    tracing::info!(
        attempted = outcomes.len(),
        failed,
        "headline fetch finished"
    );

    let today = chrono::Local::now().date_naive();
    let records = crate::ingest::parse_outcomes(&outcomes, today);
    tracing::info!(headlines = records.len(), "headlines parsed");

    let scored = score_headlines(collab.scorer.as_ref(), records);
    let means = mean_scores(&scored);
    tracing::info!(tickers = means.len(), "sentiment averaged per ticker");

    let market = crate::market::enrich_all(collab.market.as_ref(), &tickers).await;
    let rows = join_summaries(&means, &market);
    tracing::info!(rows = rows.len(), "sentiment and market data joined");

    let picked = select_top(&rows, choice, top_n);
    tracing::info!(selected = picked.len(), ?choice, top_n, "selection done");

    collab
        .renderer
        .render(&picked, &cfg.output_file)
        .context("rendering treemap")?;

    Ok(cfg.output_file.clone())
}
