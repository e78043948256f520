use serde::Serialize;

use crate::features::DailyFeatures;
use crate::scoring::DayScore;
use crate::timing::{ContactWindow, MoodTrend, TrendDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementPattern {
    Rising,
    Steady,
    Falling,
    Unknown,
}

impl EngagementPattern {
    pub fn from_cadence(cadence: f64) -> Self {
        if cadence > 0.6 {
            EngagementPattern::Rising
        } else if cadence < 0.4 {
            EngagementPattern::Falling
        } else {
            EngagementPattern::Steady
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EngagementPattern::Rising => "rising",
            EngagementPattern::Steady => "steady",
            EngagementPattern::Falling => "falling",
            EngagementPattern::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialEnergy {
    High,
    Moderate,
    Low,
    Unknown,
}

impl SocialEnergy {
    pub fn from_engagement(engagement: f64) -> Self {
        if engagement >= 0.7 {
            SocialEnergy::High
        } else if engagement >= 0.4 {
            SocialEnergy::Moderate
        } else {
            SocialEnergy::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialEnergy::High => "high",
            SocialEnergy::Moderate => "moderate",
            SocialEnergy::Low => "low",
            SocialEnergy::Unknown => "unknown",
        }
    }
}

/// Digest of the target day shown in the verbose report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSnapshot {
    pub overall_score: f64,
    pub sentiment_trend: TrendDirection,
    pub engagement_pattern: EngagementPattern,
    pub optimal_contact_times: Vec<ContactWindow>,
    pub mood_volatility: f64,
    pub social_energy: SocialEnergy,
}

impl MoodSnapshot {
    pub fn build(
        day: Option<&DailyFeatures>,
        score: DayScore,
        trend: &MoodTrend,
        windows: &[ContactWindow],
    ) -> Self {
        let (engagement_pattern, social_energy) = match day {
            Some(day) => (
                EngagementPattern::from_cadence(day.cadence),
                SocialEnergy::from_engagement(day.engagement),
            ),
            None => (EngagementPattern::Unknown, SocialEnergy::Unknown),
        };

        Self {
            overall_score: score.score,
            sentiment_trend: trend.trend,
            engagement_pattern,
            optimal_contact_times: windows.to_vec(),
            mood_volatility: trend.volatility,
            social_energy,
        }
    }
}
