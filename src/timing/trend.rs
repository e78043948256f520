use serde::Serialize;

use crate::scoring::MoodTable;
use crate::{mean, population_std_dev};

const SLOPE_THRESHOLD: f64 = 0.05;
const RECENT_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl TrendDirection {
    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
            TrendDirection::InsufficientData => "insufficient_data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodTrend {
    pub days_back: usize,
    pub trend: TrendDirection,
    pub volatility: f64,
    pub consistency: f64,
    pub recent_avg: f64,
}

/// Summarizes the mood index over the last `days_back` populated days.
/// A `days_back` of 0 covers the whole history.
pub fn analyze_mood_trends(mood: &MoodTable, days_back: usize) -> MoodTrend {
    let scores = if days_back == 0 {
        mood.recent(mood.len())
    } else {
        mood.recent(days_back)
    };
    if scores.len() < 2 {
        return MoodTrend {
            days_back,
            trend: TrendDirection::InsufficientData,
            volatility: 0.0,
            consistency: 0.0,
            recent_avg: if scores.is_empty() { 0.5 } else { mean(&scores) },
        };
    }

    let first = scores[0];
    let last = scores[scores.len() - 1];
    let slope = (last - first) / scores.len() as f64;
    let trend = if slope > SLOPE_THRESHOLD {
        TrendDirection::Improving
    } else if slope < -SLOPE_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    let volatility = population_std_dev(&scores);
    let recent = &scores[scores.len().saturating_sub(RECENT_DAYS)..];

    MoodTrend {
        days_back,
        trend,
        volatility,
        consistency: 1.0 - volatility,
        recent_avg: mean(recent),
    }
}
