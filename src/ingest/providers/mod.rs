// src/ingest/providers/mod.rs
pub mod finviz;

pub use finviz::FinvizProvider;
