// src/aggregate.rs
// Scoring application + per-ticker aggregation.

use std::collections::BTreeMap;

use crate::ingest::types::HeadlineRecord;
use crate::sentiment::{PolarityScorer, PolarityScores};

/// A headline with its four polarity components attached.
#[derive(Debug, Clone)]
pub struct ScoredHeadline {
    pub record: HeadlineRecord,
    pub scores: PolarityScores,
}

/// Mean of each polarity component across one ticker's headlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentMeans {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
    pub headlines: usize,
}

/// Score every headline in order. Output is positionally aligned with the
/// input sequence.
pub fn score_headlines(
    scorer: &dyn PolarityScorer,
    records: Vec<HeadlineRecord>,
) -> Vec<ScoredHeadline> {
    records
        .into_iter()
        .map(|record| {
            let scores = scorer.polarity(&record.headline);
            ScoredHeadline { record, scores }
        })
        .collect()
}

/// Group by ticker and average each component. A ticker with zero scored
/// headlines simply has no entry; there are no zero rows.
pub fn mean_scores(scored: &[ScoredHeadline]) -> BTreeMap<String, SentimentMeans> {
    let mut sums: BTreeMap<String, SentimentMeans> = BTreeMap::new();
    for sh in scored {
        let entry = sums
            .entry(sh.record.ticker.clone())
            .or_insert(SentimentMeans {
                neg: 0.0,
                neu: 0.0,
                pos: 0.0,
                compound: 0.0,
                headlines: 0,
            });
        entry.neg += sh.scores.neg;
        entry.neu += sh.scores.neu;
        entry.pos += sh.scores.pos;
        entry.compound += sh.scores.compound;
        entry.headlines += 1;
    }
    for means in sums.values_mut() {
        let n = means.headlines as f64;
        means.neg /= n;
        means.neu /= n;
        means.pos /= n;
        means.compound /= n;
    }
    sums
}
