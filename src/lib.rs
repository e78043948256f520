pub mod config;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod posts;
pub mod report;
pub mod scoring;
pub mod summary;
pub mod timing;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::config::VibecheckConfig;
use crate::error::{Result, VibecheckError};
use crate::features::{FeatureExtractor, FeatureSet};
use crate::posts::Post;
use crate::scoring::{DayScore, DayScorer, MoodTable, WeightedScorer};
use crate::summary::MoodSnapshot;
use crate::timing::{
    suggest_hours, ContactRecommendation, ContactTimingAnalyzer, ContactWindow, MoodTrend,
};

/// Everything derived from one post history for one target day.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub target_date: NaiveDate,
    pub features: FeatureSet,
    pub mood: MoodTable,
    pub day_score: DayScore,
    pub suggested_windows: Vec<ContactWindow>,
    pub recommendation: ContactRecommendation,
    pub trend: MoodTrend,
    pub snapshot: MoodSnapshot,
}

/// Runs the full pipeline. Without an explicit target the day of the latest
/// post is used, or today when there are no posts.
pub fn analyze(posts: &[Post], target: Option<NaiveDate>, config: &VibecheckConfig) -> Analysis {
    let target_date = target
        .or_else(|| posts.last().map(Post::day))
        .unwrap_or_else(|| Local::now().date_naive());

    let extractor = FeatureExtractor::new(&config.lexicon, config.timing.cadence_days);
    let features = extractor.extract(posts);
    let mood = MoodTable::build(&features.daily, &config.mood, config.timing.baseline_days);

    let scorer = DayScorer::new(
        &features.daily,
        &mood,
        WeightedScorer::new(config.weights.clone()),
        config.calibration.clone(),
    );
    let day_score = scorer.score_day(target_date);

    let suggested_windows = suggest_hours(
        &features.golden,
        posts,
        config.timing.top_hours,
        config.timing.saturation_penalty,
    );

    let analyzer = ContactTimingAnalyzer::new(
        &features.daily,
        &mood,
        &features.golden,
        &config.lexicon,
        config.timing.trend_days,
    );
    let recommendation = analyzer.generate_contact_recommendation(target_date);
    let trend = analyzer.analyze_mood_trends();
    let snapshot = MoodSnapshot::build(
        features.get(target_date),
        day_score,
        &trend,
        &suggested_windows,
    );

    info!(
        date = %target_date,
        score = day_score.score,
        urgency = recommendation.urgency_level.label(),
        "analysis complete"
    );

    Analysis {
        target_date,
        features,
        mood,
        day_score,
        suggested_windows,
        recommendation,
        trend,
        snapshot,
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| VibecheckError::Date(value.to_string()))
}

pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(1.0)
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Linear ramp from 0 at `-half_width` to 1 at `half_width`.
pub fn scale_sym(x: f64, half_width: f64) -> f64 {
    if x >= half_width {
        return 1.0;
    }
    if x <= -half_width {
        return 0.0;
    }
    0.5 + 0.5 * (x / half_width)
}

pub fn zscore(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 1e-9 {
        return 0.0;
    }
    (x - mean) / std_dev
}

/// Arithmetic mean; 0.5 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.5;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 || values.iter().all(|value| *value == values[0]) {
        return 0.0;
    }
    let mu = mean(values);
    let variance =
        values.iter().map(|value| (value - mu).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
