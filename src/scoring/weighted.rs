use serde::{Deserialize, Serialize};

use crate::features::DailyFeatures;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub sentiment: f64,
    pub emoji: f64,
    pub hashtags: f64,
    pub cadence: f64,
    pub engagement: f64,
    pub time_of_day: f64,
    /// Reserved. Carried in the table but not part of the composite.
    pub platform_signal: f64,
    pub baseline_shift: f64,
    pub delta_gain: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.35,
            emoji: 0.15,
            hashtags: 0.10,
            cadence: 0.10,
            engagement: 0.15,
            time_of_day: 0.10,
            platform_signal: 0.05,
            baseline_shift: 0.20,
            delta_gain: 0.8,
        }
    }
}

/// Logistic calibration applied to the composite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub slope: f64,
    pub midpoint: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            slope: 3.0,
            midpoint: 0.6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Weighted feature sum plus the baseline term `shift * (0.5 + gain * delta)`.
    pub fn score(&self, features: &DailyFeatures, mood_delta: f64) -> f64 {
        let mut score = 0.0;

        score += features.sentiment * self.weights.sentiment;
        score += features.emoji * self.weights.emoji;
        score += features.hashtags * self.weights.hashtags;
        score += features.cadence * self.weights.cadence;
        score += features.engagement * self.weights.engagement;
        score += features.time_of_day * self.weights.time_of_day;

        score += self.weights.baseline_shift * (0.5 + self.weights.delta_gain * mood_delta);

        score
    }
}
