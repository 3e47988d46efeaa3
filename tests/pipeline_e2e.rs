// tests/pipeline_e2e.rs
// End-to-end run with mocked network collaborators and the real analyzer
// and renderer.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use sp500_sentiment_treemap::constituents::{Constituent, ConstituentSource};
use sp500_sentiment_treemap::ingest::types::{HeadlineSource, RawNewsRow};
use sp500_sentiment_treemap::market::{MarketDataProvider, MarketSnapshot};
use sp500_sentiment_treemap::render::PlotlyTreemapRenderer;
use sp500_sentiment_treemap::{pipeline, Choice, Collaborators, Config, VaderAnalyzer};

struct MockConstituents;

#[async_trait]
impl ConstituentSource for MockConstituents {
    async fn fetch(&self) -> Result<Vec<Constituent>> {
        Ok(["AAA", "BBB", "CCC", "DDD"]
            .iter()
            .map(|t| Constituent {
                ticker: t.to_string(),
                company: format!("{t} Corp"),
                sector: "unused here".to_string(),
            })
            .collect())
    }
}

struct MockHeadlines;

#[async_trait]
impl HeadlineSource for MockHeadlines {
    async fn fetch_news(&self, ticker: &str) -> Result<Vec<RawNewsRow>> {
        let rows = |headlines: &[&str]| {
            headlines
                .iter()
                .map(|h| RawNewsRow {
                    headline: h.to_string(),
                    stamp: "Today 09:00AM".to_string(),
                })
                .collect::<Vec<_>>()
        };
        match ticker {
            "AAA" => Ok(rows(&[
                "Shares surge on record profit",
                "Analysts cheer strong growth",
            ])),
            "BBB" => Ok(rows(&["Stock plunges after weak earnings and layoffs"])),
            "CCC" => Ok(rows(&["Modest gains for the quarter"])),
            // DDD never yields headlines, so it must not reach the chart.
            _ => Err(anyhow!("simulated fetch failure")),
        }
    }
    fn name(&self) -> &'static str {
        "MockHeadlines"
    }
}

struct MockMarket;

#[async_trait]
impl MarketDataProvider for MockMarket {
    async fn snapshot(&self, ticker: &str) -> Result<MarketSnapshot> {
        let snap = |sector: &str, industry: &str, price: f64| MarketSnapshot {
            price: Some(price),
            sector: Some(sector.to_string()),
            industry: Some(industry.to_string()),
        };
        match ticker {
            "AAA" => Ok(snap("Tech", "Software", 101.5)),
            "BBB" => Ok(snap("Tech", "Hardware", 55.25)),
            "CCC" => Ok(snap("Health", "Pharma", 77.0)),
            _ => Err(anyhow!("simulated lookup failure")),
        }
    }
    fn name(&self) -> &'static str {
        "MockMarket"
    }
}

fn test_collaborators() -> Collaborators {
    Collaborators {
        constituents: Box::new(MockConstituents),
        headlines: Box::new(MockHeadlines),
        market: Box::new(MockMarket),
        scorer: Box::new(VaderAnalyzer::new()),
        renderer: Box::new(PlotlyTreemapRenderer::new()),
    }
}

fn test_config(dir: &std::path::Path) -> Config {
    let mut cfg = Config::default();
    cfg.request_delay_ms = 1;
    cfg.output_file = dir.join("stock_sentiment.html");
    cfg
}

#[tokio::test]
async fn most_positive_top_one_per_sector() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = test_config(tmp.path());

    let artifact = pipeline::run(&cfg, Choice::MostPositive, 1, &test_collaborators())
        .await
        .unwrap();

    let html = std::fs::read_to_string(&artifact).unwrap();
    // Tech's most positive is AAA; Health only has CCC. BBB loses the Tech
    // slot and DDD (failed fetch) never makes it in.
    assert!(html.contains("AAA"));
    assert!(html.contains("CCC"));
    assert!(!html.contains("\"BBB\""));
    assert!(!html.contains("DDD"));
    assert!(html.contains("treemap"));
}

#[tokio::test]
async fn most_negative_flips_the_tech_slot() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = test_config(tmp.path());

    let artifact = pipeline::run(&cfg, Choice::MostNegative, 1, &test_collaborators())
        .await
        .unwrap();

    let html = std::fs::read_to_string(&artifact).unwrap();
    assert!(html.contains("BBB"));
    assert!(!html.contains("\"AAA\""));
}

#[tokio::test]
async fn repeat_runs_write_identical_artifacts() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cfg1 = test_config(tmp.path());
    cfg1.output_file = tmp.path().join("first.html");
    let mut cfg2 = test_config(tmp.path());
    cfg2.output_file = tmp.path().join("second.html");

    pipeline::run(&cfg1, Choice::MostPositive, 2, &test_collaborators())
        .await
        .unwrap();
    pipeline::run(&cfg2, Choice::MostPositive, 2, &test_collaborators())
        .await
        .unwrap();

    let first = std::fs::read_to_string(tmp.path().join("first.html")).unwrap();
    let second = std::fs::read_to_string(tmp.path().join("second.html")).unwrap();
    assert_eq!(first, second);
}
