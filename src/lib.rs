// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod aggregate;
pub mod config;
pub mod constituents;
pub mod datetime;
pub mod market;
pub mod pipeline;
pub mod render;
pub mod select;
pub mod sentiment;
pub mod summary;

// Headline ingestion (per-ticker fetch, row parsing, providers)
pub mod ingest;

// ---- Re-exports for stable public API ----
pub use crate::config::Config;
pub use crate::pipeline::{run, Collaborators};
pub use crate::select::Choice;
pub use crate::sentiment::{PolarityScorer, PolarityScores, VaderAnalyzer};
pub use crate::summary::TickerSummary;
