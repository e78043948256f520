use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::clamp01;
use crate::features::{DailyFeatures, GoldenHourTable};
use crate::lexicon::Lexicons;
use crate::scoring::MoodTable;
use crate::timing::{analyze_mood_trends, ContactWindow, MoodTrend};

const LOW_SIGNAL: f64 = 0.3;
const CONTACT_WINDOWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Minimal,
    Low,
    Medium,
    High,
    Unknown,
}

impl UrgencyLevel {
    pub fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Minimal => "minimal",
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoodContext {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "unknown")]
    Unknown,
}

impl MoodContext {
    pub fn from_sentiment(sentiment: f64) -> Self {
        if sentiment > 0.7 {
            MoodContext::VeryPositive
        } else if sentiment > 0.5 {
            MoodContext::Positive
        } else if sentiment > 0.3 {
            MoodContext::Neutral
        } else {
            MoodContext::Negative
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodContext::VeryPositive => "very positive",
            MoodContext::Positive => "positive",
            MoodContext::Neutral => "neutral",
            MoodContext::Negative => "negative",
            MoodContext::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactUrgency {
    pub level: UrgencyLevel,
    pub score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRecommendation {
    pub best_day: NaiveDate,
    pub best_hours: Vec<ContactWindow>,
    pub confidence: f64,
    pub urgency_level: UrgencyLevel,
    pub mood_context: MoodContext,
    pub reasoning: String,
}

/// Weekday-template contact timing, urgency and mood trend.
#[derive(Debug, Clone)]
pub struct ContactTimingAnalyzer<'a> {
    daily: &'a BTreeMap<NaiveDate, DailyFeatures>,
    mood: &'a MoodTable,
    golden: &'a GoldenHourTable,
    lexicons: &'a Lexicons,
    trend_days: usize,
}

impl<'a> ContactTimingAnalyzer<'a> {
    pub fn new(
        daily: &'a BTreeMap<NaiveDate, DailyFeatures>,
        mood: &'a MoodTable,
        golden: &'a GoldenHourTable,
        lexicons: &'a Lexicons,
        trend_days: usize,
    ) -> Self {
        Self {
            daily,
            mood,
            golden,
            lexicons,
            trend_days,
        }
    }

    pub fn analyze_mood_trends(&self) -> MoodTrend {
        analyze_mood_trends(self.mood, self.trend_days)
    }

    /// Top candidate hours for the date's weekday, ranked by golden score.
    pub fn find_optimal_contact_times(&self, date: NaiveDate) -> Vec<ContactWindow> {
        let mut scored: Vec<(u32, f64)> = self
            .lexicons
            .candidate_hours(date.weekday())
            .iter()
            .map(|hour| (*hour, self.golden.get(*hour)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(CONTACT_WINDOWS)
            .map(|(hour, _)| ContactWindow::for_hour(hour))
            .collect()
    }

    pub fn calculate_contact_urgency(&self, date: NaiveDate) -> ContactUrgency {
        let Some(day) = self.daily.get(&date) else {
            return ContactUrgency {
                level: UrgencyLevel::Unknown,
                score: 0.0,
                reason: "No data available for this date".to_string(),
            };
        };

        let indicators = [day.sentiment, day.emoji, day.hashtags, day.engagement]
            .iter()
            .filter(|value| **value < LOW_SIGNAL)
            .count();

        let (level, score, reason) = match indicators {
            0 => (UrgencyLevel::Minimal, 0.2, "Positive mood indicators present"),
            1 => (UrgencyLevel::Low, 0.5, "Minor mood fluctuations detected"),
            2 => (UrgencyLevel::Medium, 0.7, "Some concerning mood signals detected"),
            _ => (UrgencyLevel::High, 0.9, "Multiple negative mood indicators detected"),
        };

        ContactUrgency {
            level,
            score,
            reason: reason.to_string(),
        }
    }

    pub fn generate_contact_recommendation(&self, date: NaiveDate) -> ContactRecommendation {
        let best_hours = self.find_optimal_contact_times(date);
        let urgency = self.calculate_contact_urgency(date);
        let trend = self.analyze_mood_trends();

        let (confidence, mood_context) = match self.daily.get(&date) {
            Some(day) => (
                clamp01(
                    0.3 * day.sentiment
                        + 0.2 * day.emoji
                        + 0.2 * day.hashtags
                        + 0.2 * day.engagement
                        + 0.1 * (1.0 - trend.volatility),
                ),
                MoodContext::from_sentiment(day.sentiment),
            ),
            None => (0.0, MoodContext::Unknown),
        };

        ContactRecommendation {
            best_day: date,
            best_hours,
            confidence,
            urgency_level: urgency.level,
            mood_context,
            reasoning: urgency.reason,
        }
    }
}
