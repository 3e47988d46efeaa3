// src/render/mod.rs
pub mod plotly;

pub use plotly::PlotlyTreemapRenderer;

use anyhow::Result;
use std::path::Path;

use crate::summary::TickerSummary;

/// Collaborator interface: selection rows in, chart artifact out. Rendering
/// failures are fatal to the run; there is no deliverable without a chart.
pub trait TreemapRenderer: Send + Sync {
    fn render(&self, rows: &[TickerSummary], out: &Path) -> Result<()>;
}
