use serde::Serialize;
use std::cmp::Ordering;

use crate::lexicon::Lexicons;

pub const HOURS_PER_DAY: usize = 24;

/// Per-hour share of positive-leaning posts plus the golden-hour prior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoldenHourTable {
    scores: [f64; HOURS_PER_DAY],
}

impl GoldenHourTable {
    pub fn from_counts(
        positive: &[u32; HOURS_PER_DAY],
        total: &[u32; HOURS_PER_DAY],
        lexicons: &Lexicons,
    ) -> Self {
        let mut scores = [0.0; HOURS_PER_DAY];
        for (hour, score) in scores.iter_mut().enumerate() {
            let fraction = if total[hour] == 0 {
                0.0
            } else {
                positive[hour] as f64 / total[hour] as f64
            };
            *score = fraction + lexicons.golden_prior_for(hour as u32);
        }
        Self { scores }
    }

    pub fn from_scores(scores: [f64; HOURS_PER_DAY]) -> Self {
        Self { scores }
    }

    /// Score for an hour; hours outside 0..24 score 0.
    pub fn get(&self, hour: u32) -> f64 {
        self.scores.get(hour as usize).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(hour, score)| (hour as u32, *score))
    }

    /// Highest-scoring hours, ties kept in hour order.
    pub fn top(&self, n: usize) -> Vec<(u32, f64)> {
        let mut ranked: Vec<(u32, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
    }
}
