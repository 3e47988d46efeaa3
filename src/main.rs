//! S&P 500 Sentiment Treemap, binary entrypoint.
//! One batch run: scrape constituents, fetch headlines, score sentiment,
//! enrich with market data, render the sector treemap.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sp500_sentiment_treemap::constituents::WikipediaSource;
use sp500_sentiment_treemap::ingest::providers::FinvizProvider;
use sp500_sentiment_treemap::market::YahooQuoteProvider;
use sp500_sentiment_treemap::render::PlotlyTreemapRenderer;
use sp500_sentiment_treemap::{pipeline, Choice, Collaborators, Config, VaderAnalyzer};

#[derive(Debug, Parser)]
#[command(
    name = "sp500-sentiment-treemap",
    about = "Daily S&P 500 news-sentiment snapshot rendered as a sector treemap"
)]
struct Cli {
    /// Rank each sector's tickers by most positive or most negative
    /// Sentiment Score.
    #[arg(value_enum, default_value = "most-positive")]
    choice: Choice,

    /// How many tickers to keep per sector.
    #[arg(short = 'n', long = "num", default_value_t = 5)]
    num: usize,

    /// Config file path (defaults to $TREEMAP_CONFIG_PATH, then
    /// config/treemap.toml, then built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Best-effort: open the artifact with the platform opener. The run already
/// succeeded by the time this is attempted.
fn open_artifact(path: &Path) {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    match std::process::Command::new(opener).arg(path).spawn() {
        Ok(_) => tracing::info!(path = %path.display(), "opened chart"),
        Err(e) => tracing::debug!(error = ?e, "could not open chart in a browser"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load_default()?,
    };

    let client = reqwest::Client::builder()
        .user_agent(cfg.user_agent.clone())
        .timeout(Duration::from_secs(30))
        .build()
        .context("building http client")?;

    let collab = Collaborators {
        constituents: Box::new(WikipediaSource::new(
            client.clone(),
            cfg.constituents_url.clone(),
        )),
        headlines: Box::new(FinvizProvider::new(client.clone(), cfg.news_base_url.clone())),
        market: Box::new(YahooQuoteProvider::new(client, cfg.quote_base_url.clone())),
        scorer: Box::new(VaderAnalyzer::new()),
        renderer: Box::new(PlotlyTreemapRenderer::new()),
    };

    let artifact = pipeline::run(&cfg, cli.choice, cli.num, &collab).await?;
    tracing::info!(path = %artifact.display(), "run complete");
    open_artifact(&artifact);
    Ok(())
}
