// src/render/plotly.rs
// Treemap figure assembly + self-contained HTML emission.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::render::TreemapRenderer;
use crate::summary::TickerSummary;

const ROOT_LABEL: &str = "Sectors";
const UNKNOWN_LABEL: &str = "Unknown";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// Renders the three-level hierarchy (Sectors -> sector -> industry ->
/// ticker) as a plotly.js treemap in one HTML file. Leaf color maps the
/// Sentiment Score onto a red-black-green diverging scale with the midpoint
/// pinned at 0, not at the data's mean.
#[derive(Debug, Clone, Default)]
pub struct PlotlyTreemapRenderer;

impl PlotlyTreemapRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Build the plotly figure (trace + layout) for a selection.
    pub fn build_figure(rows: &[TickerSummary]) -> Value {
        let mut ids: Vec<String> = vec![ROOT_LABEL.to_string()];
        let mut labels: Vec<String> = vec![ROOT_LABEL.to_string()];
        let mut parents: Vec<String> = vec![String::new()];
        let mut colors: Vec<f64> = vec![0.0];
        let mut customdata: Vec<Value> = vec![Value::Null];
        // Leaf scores per branch id so branches can be colored by the mean
        // of their descendants.
        let mut branch_scores: Vec<(String, Vec<f64>)> = Vec::new();

        for row in rows {
            let sector = row.sector.as_deref().unwrap_or(UNKNOWN_LABEL);
            let industry = row.industry.as_deref().unwrap_or(UNKNOWN_LABEL);
            let sector_id = format!("{ROOT_LABEL}/{sector}");
            let industry_id = format!("{sector_id}/{industry}");

            for (id, label, parent) in [
                (sector_id.clone(), sector, ROOT_LABEL),
                (industry_id.clone(), industry, sector_id.as_str()),
            ] {
                if !ids.contains(&id) {
                    ids.push(id.clone());
                    labels.push(label.to_string());
                    parents.push(parent.to_string());
                    colors.push(0.0);
                    customdata.push(Value::Null);
                    branch_scores.push((id, Vec::new()));
                }
            }

            for (id, scores) in branch_scores.iter_mut() {
                if *id == sector_id || *id == industry_id {
                    scores.push(row.sentiment_score);
                }
            }

            ids.push(format!("{industry_id}/{}", row.ticker));
            labels.push(row.ticker.clone());
            parents.push(industry_id);
            colors.push(row.sentiment_score);
            customdata.push(json!([
                row.price.map(round3),
                round3(row.negative),
                round3(row.neutral),
                round3(row.positive),
                round3(row.sentiment_score),
            ]));
        }

        for (id, scores) in &branch_scores {
            if scores.is_empty() {
                continue;
            }
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            if let Some(idx) = ids.iter().position(|i| i == id) {
                colors[idx] = mean;
            }
        }

        let trace = json!({
            "type": "treemap",
            "ids": ids,
            "labels": labels,
            "parents": parents,
            "customdata": customdata,
            "texttemplate": "%{label}<br>%{customdata[4]}",
            "textposition": "middle center",
            "hovertemplate": "%{label}<br>Price: %{customdata[0]}<br>Negative: %{customdata[1]}<br>Neutral: %{customdata[2]}<br>Positive: %{customdata[3]}<br>Sentiment Score: %{customdata[4]}<extra></extra>",
            "marker": {
                "colors": colors,
                "colorscale": [[0.0, "#FF0000"], [0.5, "#000000"], [1.0, "#00FF00"]],
                "cmid": 0,
                "showscale": true
            }
        });

        json!({
            "data": [trace],
            "layout": {
                "margin": { "t": 30, "l": 10, "r": 10, "b": 10 },
                "font": { "size": 20 }
            }
        })
    }

    fn html_page(figure: &Value) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Stock Sentiment</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="treemap" style="width:100%;height:100vh;"></div>
<script>
const figure = {figure};
Plotly.newPlot("treemap", figure.data, figure.layout);
</script>
</body>
</html>
"#
        )
    }
}

impl TreemapRenderer for PlotlyTreemapRenderer {
    fn render(&self, rows: &[TickerSummary], out: &Path) -> Result<()> {
        let figure = Self::build_figure(rows);
        let page = Self::html_page(&figure);
        fs::write(out, page).with_context(|| format!("writing chart to {}", out.display()))?;
        tracing::info!(path = %out.display(), leaves = rows.len(), "treemap written");
        Ok(())
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
