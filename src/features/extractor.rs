use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::features::golden::{GoldenHourTable, HOURS_PER_DAY};
use crate::features::text::PostSignals;
use crate::lexicon::Lexicons;
use crate::posts::Post;
use crate::{clamp01, mean, population_std_dev, scale_sym, sigmoid, zscore};

const WORD_HALF_WIDTH: f64 = 10.0;
const EMOJI_HALF_WIDTH: f64 = 5.0;
const HASHTAG_HALF_WIDTH: f64 = 5.0;
const CONTEXT_DIVISOR: f64 = 5.0;
const NEUTRAL: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyFeatures {
    pub post_count: usize,
    pub sentiment: f64,
    pub emoji: f64,
    pub hashtags: f64,
    pub engagement: f64,
    pub context: f64,
    pub cadence: f64,
    pub time_of_day: f64,
    pub likes_z: f64,
    pub comments_z: f64,
    pub shares_z: f64,
}

impl DailyFeatures {
    /// A day with every bounded signal at the given level.
    pub fn uniform(level: f64) -> Self {
        let level = clamp01(level);
        Self {
            post_count: 1,
            sentiment: level,
            emoji: level,
            hashtags: level,
            engagement: level,
            context: level,
            cadence: level,
            time_of_day: level,
            likes_z: 0.0,
            comments_z: 0.0,
            shares_z: 0.0,
        }
    }
}

/// Output of a feature extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSet {
    pub daily: BTreeMap<NaiveDate, DailyFeatures>,
    pub golden: GoldenHourTable,
}

impl FeatureSet {
    pub fn get(&self, day: NaiveDate) -> Option<&DailyFeatures> {
        self.daily.get(&day)
    }
}

#[derive(Debug, Clone)]
pub struct FeatureExtractor<'a> {
    lexicons: &'a Lexicons,
    cadence_days: usize,
}

#[derive(Default)]
struct DayTotals {
    words: i64,
    emoji: i64,
    hashtags: i64,
    topics: Vec<i64>,
    engagement: Vec<f64>,
    likes: u64,
    comments: u64,
    shares: u64,
}

struct CounterStats {
    mean: f64,
    std_dev: f64,
}

impl CounterStats {
    fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 1.0,
            };
        }
        Self {
            mean: mean(values),
            std_dev: population_std_dev(values),
        }
    }

    fn zscore(&self, value: u64) -> f64 {
        zscore(value as f64, self.mean, self.std_dev)
    }
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(lexicons: &'a Lexicons, cadence_days: usize) -> Self {
        Self {
            lexicons,
            cadence_days,
        }
    }

    pub fn extract(&self, posts: &[Post]) -> FeatureSet {
        let mut by_day: BTreeMap<NaiveDate, Vec<&Post>> = BTreeMap::new();
        for post in posts {
            by_day.entry(post.day()).or_default().push(post);
        }

        let likes = CounterStats::from_values(&counter_values(posts, |post| post.likes));
        let comments = CounterStats::from_values(&counter_values(posts, |post| post.comments));
        let shares = CounterStats::from_values(&counter_values(posts, |post| post.shares));

        let mut positive_by_hour = [0u32; HOURS_PER_DAY];
        let mut total_by_hour = [0u32; HOURS_PER_DAY];
        let mut daily = BTreeMap::new();

        for (day, day_posts) in &by_day {
            let mut totals = DayTotals {
                topics: vec![0; self.lexicons.topics.len()],
                ..DayTotals::default()
            };

            for post in day_posts {
                let signals = PostSignals::from_text(&post.text, self.lexicons);
                totals.words += signals.positive_words - signals.negative_words;
                totals.emoji += signals.positive_emoji - signals.negative_emoji;
                totals.hashtags += signals.positive_hashtags - signals.negative_hashtags;
                for (total, score) in totals.topics.iter_mut().zip(&signals.topics) {
                    *total += score;
                }
                totals.engagement.push(self.engagement_score(post));
                totals.likes = totals.likes.saturating_add(post.likes);
                totals.comments = totals.comments.saturating_add(post.comments);
                totals.shares = totals.shares.saturating_add(post.shares);

                let hour = post.hour() as usize;
                total_by_hour[hour] += 1;
                if signals.is_positive() {
                    positive_by_hour[hour] += 1;
                }
            }

            let context = if totals.topics.is_empty() {
                NEUTRAL
            } else {
                let values: Vec<f64> = totals.topics.iter().map(|score| *score as f64).collect();
                clamp01(mean(&values) / CONTEXT_DIVISOR)
            };
            let engagement = if totals.engagement.is_empty() {
                NEUTRAL
            } else {
                clamp01(mean(&totals.engagement))
            };

            daily.insert(
                *day,
                DailyFeatures {
                    post_count: day_posts.len(),
                    sentiment: scale_sym(totals.words as f64, WORD_HALF_WIDTH),
                    emoji: scale_sym(totals.emoji as f64, EMOJI_HALF_WIDTH),
                    hashtags: scale_sym(totals.hashtags as f64, HASHTAG_HALF_WIDTH),
                    engagement,
                    context,
                    cadence: NEUTRAL,
                    time_of_day: NEUTRAL,
                    likes_z: likes.zscore(totals.likes),
                    comments_z: comments.zscore(totals.comments),
                    shares_z: shares.zscore(totals.shares),
                },
            );
        }

        let golden =
            GoldenHourTable::from_counts(&positive_by_hour, &total_by_hour, self.lexicons);

        let days: Vec<NaiveDate> = daily.keys().copied().collect();
        let counts: Vec<f64> = days
            .iter()
            .map(|day| daily[day].post_count as f64)
            .collect();
        for (idx, day) in days.iter().enumerate() {
            let start = idx.saturating_sub(self.cadence_days);
            let cadence = cadence_score(counts[idx], &counts[start..idx]);
            let hours: Vec<u32> = by_day[day].iter().map(|post| post.hour()).collect();
            if let Some(features) = daily.get_mut(day) {
                features.cadence = cadence;
                features.time_of_day = time_of_day_score(&hours, &golden);
            }
        }

        debug!(days = daily.len(), posts = posts.len(), "extracted daily features");
        FeatureSet { daily, golden }
    }

    /// Platform-weighted blend of the post's engagement counters. Each counter
    /// is divided by its own maximum, so any non-zero count contributes its
    /// full weight.
    pub fn engagement_score(&self, post: &Post) -> f64 {
        let weights = self.lexicons.engagement_weights(&post.platform);
        clamp01(
            weights.likes * self_normalized(post.likes)
                + weights.comments * self_normalized(post.comments)
                + weights.shares * self_normalized(post.shares)
                + weights.retweets * self_normalized(post.retweets),
        )
    }
}

/// Logistic of today's count against the mean of the preceding days.
pub fn cadence_score(count: f64, previous: &[f64]) -> f64 {
    if previous.is_empty() {
        return NEUTRAL;
    }
    clamp01(sigmoid(count - mean(previous)))
}

/// Mean golden score of the given posting hours.
pub fn time_of_day_score(hours: &[u32], golden: &GoldenHourTable) -> f64 {
    if hours.is_empty() {
        return NEUTRAL;
    }
    let scores: Vec<f64> = hours.iter().map(|hour| golden.get(*hour)).collect();
    clamp01(mean(&scores))
}

fn self_normalized(count: u64) -> f64 {
    count as f64 / count.max(1) as f64
}

fn counter_values(posts: &[Post], field: impl Fn(&Post) -> u64) -> Vec<f64> {
    posts.iter().map(|post| field(post) as f64).collect()
}
