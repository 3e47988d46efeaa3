// src/constituents.rs
// Constituent Loader: scrape the reference page and extract the ticker table.
// Failure here is fatal to the run (no company list, nothing to process).

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table#constituents").expect("valid selector"));
static TR_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static TH_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("th").expect("valid selector"));
static TD_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));

/// One S&P 500 constituent. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constituent {
    pub ticker: String,
    pub company: String,
    pub sector: String,
}

/// Stage-one input source, injectable so tests can skip the network.
#[async_trait::async_trait]
pub trait ConstituentSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Constituent>>;
}

/// The real reference page.
pub struct WikipediaSource {
    client: reqwest::Client,
    url: String,
}

impl WikipediaSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl ConstituentSource for WikipediaSource {
    async fn fetch(&self) -> Result<Vec<Constituent>> {
        fetch_constituents(&self.client, &self.url).await
    }
}

/// Fetch the reference page and parse the constituent table.
/// No fallback, no retry.
pub async fn fetch_constituents(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Constituent>> {
    let body = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetching constituents page {url}"))?
        .error_for_status()
        .context("constituents page returned an error status")?
        .text()
        .await
        .context("reading constituents page body")?;
    parse_constituents(&body)
}

/// Parse the constituent table out of a full HTML document.
/// Column positions are resolved from the header row, not hard-coded.
pub fn parse_constituents(html: &str) -> Result<Vec<Constituent>> {
    let doc = Html::parse_document(html);
    let table = doc
        .select(&TABLE_SEL)
        .next()
        .ok_or_else(|| anyhow!("constituents table not found in page"))?;

    let mut rows = table.select(&TR_SEL);
    let header = rows
        .next()
        .ok_or_else(|| anyhow!("constituents table has no header row"))?;

    let headers: Vec<String> = header.select(&TH_SEL).map(cell_text).collect();
    let ticker_col = col_index(&headers, "Symbol")?;
    let company_col = col_index(&headers, "Security")?;
    let sector_col = col_index(&headers, "GICS Sector")?;

    let mut out = Vec::new();
    for row in rows {
        let cells: Vec<String> = row.select(&TD_SEL).map(cell_text).collect();
        let max_col = ticker_col.max(company_col).max(sector_col);
        if cells.len() <= max_col {
            continue; // spanner / malformed row
        }
        let ticker = cells[ticker_col].clone();
        if ticker.is_empty() {
            continue;
        }
        out.push(Constituent {
            ticker,
            company: cells[company_col].clone(),
            sector: cells[sector_col].clone(),
        });
    }

    if out.is_empty() {
        return Err(anyhow!("constituents table contained no data rows"));
    }
    Ok(out)
}

fn col_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("constituents table is missing the `{name}` column"))
}

fn cell_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
        <html><body>
        <table id="constituents">
          <tr><th>Symbol</th><th>Security</th><th>GICS Sector</th></tr>
          <tr><td><a href="/q?s=MMM">MMM</a></td><td>3M</td><td>Industrials</td></tr>
          <tr><td>AOS</td><td>A. O. Smith</td><td>Industrials</td></tr>
          <tr><td>ABT</td><td>Abbott Laboratories</td><td>Health Care</td></tr>
        </table>
        </body></html>"##;

    #[test]
    fn parses_rows_in_document_order() {
        let out = parse_constituents(PAGE).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].ticker, "MMM");
        assert_eq!(out[0].company, "3M");
        assert_eq!(out[2].sector, "Health Care");
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = parse_constituents("<html><body><p>nope</p></body></html>").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let page = r#"<table id="constituents">
            <tr><th>Symbol</th><th>Name</th></tr>
            <tr><td>MMM</td><td>3M</td></tr>
        </table>"#;
        assert!(parse_constituents(page).is_err());
    }
}
