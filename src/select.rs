// src/select.rs
// Per-sector top-N selection by Sentiment Score.

use clap::ValueEnum;

use crate::summary::TickerSummary;

/// Run-time choice: rank each sector's tickers by most positive or most
/// negative Sentiment Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Choice {
    MostPositive,
    MostNegative,
}

/// For each distinct sector (first-seen order, a missing sector is its own
/// group), keep the top `n` rows by Sentiment Score: descending for
/// MostPositive, ascending for MostNegative. The sort is stable, so ties
/// keep the input's natural row order and repeat runs are bit-identical.
pub fn select_top(rows: &[TickerSummary], choice: Choice, n: usize) -> Vec<TickerSummary> {
    let mut sector_order: Vec<Option<String>> = Vec::new();
    for row in rows {
        if !sector_order.contains(&row.sector) {
            sector_order.push(row.sector.clone());
        }
    }

    let mut out = Vec::new();
    for sector in &sector_order {
        let mut group: Vec<&TickerSummary> =
            rows.iter().filter(|r| &r.sector == sector).collect();
        match choice {
            Choice::MostPositive => {
                group.sort_by(|a, b| b.sentiment_score.total_cmp(&a.sentiment_score))
            }
            Choice::MostNegative => {
                group.sort_by(|a, b| a.sentiment_score.total_cmp(&b.sentiment_score))
            }
        }
        out.extend(group.into_iter().take(n).cloned());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ticker: &str, sector: Option<&str>, score: f64) -> TickerSummary {
        TickerSummary {
            ticker: ticker.into(),
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
            sentiment_score: score,
            sector: sector.map(|s| s.to_string()),
            industry: Some("Any".into()),
            price: Some(1.0),
        }
    }

    #[test]
    fn one_per_sector_most_positive() {
        let rows = vec![
            row("A", Some("Tech"), 0.8),
            row("B", Some("Tech"), -0.5),
            row("C", Some("Health"), 0.2),
        ];
        let picked = select_top(&rows, Choice::MostPositive, 1);
        let tickers: Vec<&str> = picked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "C"]);
    }

    #[test]
    fn most_negative_ranks_ascending() {
        let rows = vec![
            row("A", Some("Tech"), 0.8),
            row("B", Some("Tech"), -0.5),
            row("C", Some("Tech"), 0.1),
        ];
        let picked = select_top(&rows, Choice::MostNegative, 2);
        let tickers: Vec<&str> = picked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["B", "C"]);
    }

    #[test]
    fn missing_sector_is_its_own_group() {
        let rows = vec![
            row("A", Some("Tech"), 0.8),
            row("X", None, 0.9),
            row("Y", None, 0.1),
        ];
        let picked = select_top(&rows, Choice::MostPositive, 1);
        let tickers: Vec<&str> = picked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "X"]);
    }

    #[test]
    fn ties_keep_input_order_and_runs_are_identical() {
        let rows = vec![
            row("A", Some("Tech"), 0.5),
            row("B", Some("Tech"), 0.5),
            row("C", Some("Tech"), 0.5),
        ];
        let first = select_top(&rows, Choice::MostPositive, 2);
        let second = select_top(&rows, Choice::MostPositive, 2);
        assert_eq!(first, second);
        let tickers: Vec<&str> = first.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "B"]);
    }

    #[test]
    fn sector_groups_keep_first_seen_order() {
        let rows = vec![
            row("H1", Some("Health"), 0.1),
            row("T1", Some("Tech"), 0.9),
            row("H2", Some("Health"), 0.3),
        ];
        let picked = select_top(&rows, Choice::MostPositive, 5);
        let tickers: Vec<&str> = picked.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["H2", "H1", "T1"]);
    }
}
