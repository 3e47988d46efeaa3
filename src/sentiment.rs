// src/sentiment.rs
// Lexicon/rule polarity scoring. Deterministic: the same text always yields
// the same four components, no external state.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let raw = include_str!("../vader_lexicon.json");
    serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid sentiment lexicon")
});

// Rule constants on the usual VADER scale.
const NEGATION_SCALAR: f64 = -0.74;
const BOOSTER_INCR: f64 = 0.293;
const NORMALIZE_ALPHA: f64 = 15.0;
const NEGATION_LOOKBACK: usize = 3;

/// Four polarity components for one piece of text.
/// `compound` is in [-1, 1]; `neg + neu + pos` sums to 1 (within float
/// tolerance) whenever the text has at least one token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Collaborator interface: text in, four scores out. Lets the pipeline swap
/// the analyzer without touching any stage logic.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> PolarityScores;
}

/// Lexicon analyzer with negation and booster handling.
#[derive(Debug, Clone, Default)]
pub struct VaderAnalyzer;

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn word_valence(&self, w: &str) -> f64 {
        *LEXICON.get(w).unwrap_or(&0.0)
    }
}

impl PolarityScorer for VaderAnalyzer {
    fn polarity(&self, text: &str) -> PolarityScores {
        let tokens: Vec<String> = tokenize(text).collect();
        if tokens.is_empty() {
            return PolarityScores {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound: 0.0,
            };
        }

        // One adjusted valence per token; non-lexicon tokens stay at 0 and
        // count toward the neutral fraction.
        let mut valences = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let w = tokens[i].as_str();
            let mut v = self.word_valence(w);
            if v != 0.0 {
                if i >= 1 && is_booster(tokens[i - 1].as_str()) {
                    v += BOOSTER_INCR * v.signum();
                }
                let negated =
                    (1..=NEGATION_LOOKBACK).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
                if negated {
                    v *= NEGATION_SCALAR;
                }
            }
            valences.push(v);
        }

        let sum: f64 = valences.iter().sum();
        let compound = (sum / (sum * sum + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0);

        // Component fractions with the +-1 offsets so single-word inputs do
        // not degenerate to all-positive or all-negative.
        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for v in &valences {
            if *v > 0.0 {
                pos_sum += v + 1.0;
            } else if *v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        let total = pos_sum + neg_sum.abs() + neu_count;
        PolarityScores {
            neg: neg_sum.abs() / total,
            neu: neu_count / total,
            pos: pos_sum / total,
            compound,
        }
    }
}

/// Alphanumeric tokens, lower-cased; apostrophes are kept so contractions
/// like "won't" survive as single tokens.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "neither"
            | "nor"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "don't"
            | "doesn't"
            | "didn't"
            | "can't"
            | "cannot"
            | "without"
    )
}

fn is_booster(tok: &str) -> bool {
    matches!(
        tok,
        "very"
            | "extremely"
            | "hugely"
            | "massively"
            | "sharply"
            | "significantly"
            | "strongly"
            | "really"
            | "remarkably"
            | "substantially"
    )
}
