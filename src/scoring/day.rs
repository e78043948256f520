use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::features::DailyFeatures;
use crate::scoring::{CalibrationConfig, MoodTable, WeightedScorer};
use crate::{clamp01, sigmoid};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayScore {
    /// Probability scaled to 0-100 and rounded to one decimal.
    pub score: f64,
    pub probability: f64,
}

impl DayScore {
    pub fn neutral() -> Self {
        Self {
            score: 50.0,
            probability: 0.5,
        }
    }

    pub fn from_probability(probability: f64) -> Self {
        let probability = clamp01(probability);
        Self {
            score: (1000.0 * probability).round() / 10.0,
            probability,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DayScorer<'a> {
    daily: &'a BTreeMap<NaiveDate, DailyFeatures>,
    mood: &'a MoodTable,
    weighted_scorer: WeightedScorer,
    calibration: CalibrationConfig,
}

impl<'a> DayScorer<'a> {
    pub fn new(
        daily: &'a BTreeMap<NaiveDate, DailyFeatures>,
        mood: &'a MoodTable,
        weighted_scorer: WeightedScorer,
        calibration: CalibrationConfig,
    ) -> Self {
        Self {
            daily,
            mood,
            weighted_scorer,
            calibration,
        }
    }

    pub fn score_day(&self, day: NaiveDate) -> DayScore {
        let Some(features) = self.daily.get(&day) else {
            return DayScore::neutral();
        };
        let delta = self.mood.get(day).map(|point| point.delta()).unwrap_or(0.0);
        let composite = self.weighted_scorer.score(features, delta);
        DayScore::from_probability(self.calibrate(composite))
    }

    pub fn calibrate(&self, composite: f64) -> f64 {
        clamp01(sigmoid(
            self.calibration.slope * (composite - self.calibration.midpoint),
        ))
    }
}
