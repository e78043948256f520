use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::features::DailyFeatures;
use crate::mean;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodWeights {
    pub sentiment: f64,
    pub emoji: f64,
    pub hashtags: f64,
    pub context: f64,
}

impl Default for MoodWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.4,
            emoji: 0.3,
            hashtags: 0.2,
            context: 0.1,
        }
    }
}

impl MoodWeights {
    pub fn index(&self, features: &DailyFeatures) -> f64 {
        self.sentiment * features.sentiment
            + self.emoji * features.emoji
            + self.hashtags * features.hashtags
            + self.context * features.context
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodPoint {
    pub mood_index: f64,
    /// Mean mood index of the preceding populated days, 0.5 when there are none.
    pub baseline: f64,
}

impl MoodPoint {
    pub fn delta(&self) -> f64 {
        self.mood_index - self.baseline
    }
}

/// Mood index and rolling baseline for every populated day, computed once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MoodTable {
    points: BTreeMap<NaiveDate, MoodPoint>,
}

impl MoodTable {
    pub fn build(
        daily: &BTreeMap<NaiveDate, DailyFeatures>,
        weights: &MoodWeights,
        window: usize,
    ) -> Self {
        let series: Vec<(NaiveDate, f64)> = daily
            .iter()
            .map(|(day, features)| (*day, weights.index(features)))
            .collect();

        let mut points = BTreeMap::new();
        for (idx, (day, mood_index)) in series.iter().enumerate() {
            let previous: Vec<f64> = series[idx.saturating_sub(window)..idx]
                .iter()
                .map(|(_, value)| *value)
                .collect();
            let baseline = if previous.is_empty() {
                0.5
            } else {
                mean(&previous)
            };
            points.insert(
                *day,
                MoodPoint {
                    mood_index: *mood_index,
                    baseline,
                },
            );
        }

        Self { points }
    }

    pub fn get(&self, day: NaiveDate) -> Option<&MoodPoint> {
        self.points.get(&day)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mood index of the last `n` populated days, oldest first.
    pub fn recent(&self, n: usize) -> Vec<f64> {
        let skip = self.points.len().saturating_sub(n);
        self.points
            .values()
            .skip(skip)
            .map(|point| point.mood_index)
            .collect()
    }
}
