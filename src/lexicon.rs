//! Static sentiment lexicons and timing priors.
//!
//! Everything here is plain data. [`Lexicons::default`] carries the built-in
//! word lists; a config file may replace any field, and tests construct
//! their own tables to pin behaviour.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "great", "good", "fantastic", "wonderful", "lovely", "grateful",
    "thankful", "progress", "proud", "win", "winning", "excited", "happy", "joy", "joyful",
    "relieved", "calm", "peace", "balanced", "energized", "bloom", "thriving", "celebrate",
    "celebration", "love", "beautiful", "perfect", "incredible", "outstanding", "excellent",
    "brilliant", "marvelous", "splendid", "delightful", "charming", "pleasant", "satisfying",
    "fulfilling", "inspiring", "motivating", "uplifting", "encouraging", "supportive", "success",
    "achievement", "accomplishment", "breakthrough", "milestone", "victory", "triumph", "story",
    "growth", "development", "improvement", "advancement", "innovation", "creativity", "passion",
    "enthusiasm", "optimism", "hope", "blessed", "fortunate", "lucky", "privileged", "honored",
    "humbled", "touched", "moved", "inspired", "motivated", "determined", "focused", "confident",
    "strong", "resilient", "brave", "courageous", "authentic", "genuine", "real",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "tired", "exhausted", "lonely", "annoyed", "angry", "frustrated", "upset", "sick",
    "ill", "anxious", "stressed", "overwhelmed", "meh", "bored", "hopeless", "awful", "terrible",
    "worst", "cry", "crying", "mad", "furious", "rage", "broken", "hurt", "heartbroken",
    "depressed", "miserable", "devastated", "crushed", "defeated", "discouraged", "disheartened",
    "disappointed", "disillusioned", "betrayed", "abandoned", "rejected", "isolated", "alienated",
    "misunderstood", "ignored", "neglected", "worried", "concerned", "scared", "frightened",
    "terrified", "panicked", "nervous", "jittery", "restless", "agitated", "irritable", "cranky",
    "grumpy", "moody", "bitter", "resentful", "jealous", "envious", "spiteful", "vengeful", "pain",
    "suffering", "agony", "torment", "torture", "misery", "despair", "desolation", "emptiness",
    "void", "darkness", "shadow", "cloud", "storm", "chaos", "confusion", "disorder", "mess",
    "disaster", "catastrophe", "failure",
];

const POSITIVE_EMOJI: &[&str] = &[
    "😊", "😁", "😄", "😇", "😍", "🥰", "🤗", "👍", "✨", "🌟", "🎉", "🔥", "💯", "🌞", "☀️", "🍰",
    "🍀", "🥳", "😎", "🤩", "🥺", "😌", "💪", "🎯", "🏆", "💎", "🌈", "🦋", "🌺", "🌸",
];

const NEGATIVE_EMOJI: &[&str] = &[
    "😞", "😢", "😭", "😡", "😠", "🤬", "💔", "🙄", "😮‍💨", "😴", "🥱", "🤒", "🤕", "☔", "🌧️", "🖤",
    "😰", "😨", "😱", "😵", "🤢", "🤮", "😷", "🤧", "💀", "👻", "😈", "👿",
];

const POSITIVE_HASHTAGS: &[&str] = &[
    "#blessed", "#grateful", "#selfcare", "#wins", "#goodvibes", "#greatday", "#weekendvibes",
    "#vacay", "#glowup", "#motivation", "#inspiration", "#success", "#love", "#happiness",
    "#blessings", "#thankful", "#positivevibes", "#goodlife", "#livingmybestlife", "#goals",
    "#achievement",
];

const NEGATIVE_HASHTAGS: &[&str] = &[
    "#mondayblues", "#roughday", "#burnout", "#tired", "#fml", "#fail", "#worstday", "#drained",
    "#alone", "#stress", "#anxiety", "#depression", "#sad", "#lonely", "#heartbroken",
    "#overwhelmed", "#exhausted", "#struggling", "#hardtimes", "#badday",
];

const BUSINESS_HOURS: &[u32] = &[9, 10, 11, 14, 15, 16];
const FRIDAY_HOURS: &[u32] = &[9, 10, 11, 14, 15, 16, 17, 18];
const WEEKEND_HOURS: &[u32] = &[10, 11, 12, 14, 15, 16, 17, 18, 19, 20];

/// Positive and negative keywords for one life-context topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicBucket {
    pub name: String,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl TopicBucket {
    fn new(name: &str, positive: &[&str], negative: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            positive: to_strings(positive),
            negative: to_strings(negative),
        }
    }
}

/// Per-metric engagement weights for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementWeights {
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub retweets: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            likes: 0.5,
            comments: 0.5,
            shares: 0.5,
            retweets: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicons {
    pub positive_words: HashSet<String>,
    pub negative_words: HashSet<String>,
    pub positive_emoji: HashSet<String>,
    pub negative_emoji: HashSet<String>,
    pub positive_hashtags: HashSet<String>,
    pub negative_hashtags: HashSet<String>,
    pub fallback_hours: Vec<u32>,
    pub golden_hours: Vec<u32>,
    pub golden_prior: f64,
    pub topics: Vec<TopicBucket>,
    pub platform_weights: HashMap<String, EngagementWeights>,
    /// Candidate contact hours keyed by lower-case weekday name.
    pub optimal_hours: BTreeMap<String, Vec<u32>>,
}

impl Default for Lexicons {
    fn default() -> Self {
        let topics = vec![
            TopicBucket::new(
                "work",
                &[
                    "promotion", "raise", "bonus", "recognition", "achievement", "success", "team",
                    "collaboration", "innovation",
                ],
                &[
                    "layoff", "fired", "demotion", "deadline", "pressure", "stress", "overtime",
                    "burnout", "conflict",
                ],
            ),
            TopicBucket::new(
                "social",
                &[
                    "party", "celebration", "friends", "family", "love", "romance", "date",
                    "relationship", "marriage",
                ],
                &[
                    "breakup", "divorce", "argument", "fight", "betrayal", "gossip", "drama",
                    "conflict", "rejection",
                ],
            ),
            TopicBucket::new(
                "health",
                &[
                    "fitness", "workout", "healthy", "wellness", "meditation", "yoga", "running",
                    "gym", "nutrition",
                ],
                &[
                    "sick", "illness", "injury", "pain", "fatigue", "exhaustion", "stress",
                    "anxiety", "depression",
                ],
            ),
            TopicBucket::new(
                "creative",
                &[
                    "art", "music", "writing", "design", "inspiration", "muse", "creative",
                    "artistic", "expression",
                ],
                &[
                    "block", "stuck", "uninspired", "criticism", "rejection", "failure", "doubt",
                    "insecurity",
                ],
            ),
        ];

        let platform_weights = [
            ("twitter", 0.4, 0.6, 0.5, 0.8),
            ("instagram", 0.6, 0.8, 0.7, 0.5),
            ("facebook", 0.5, 0.7, 0.6, 0.5),
            ("linkedin", 0.3, 0.9, 0.8, 0.5),
            ("tiktok", 0.5, 0.6, 0.9, 0.5),
        ]
        .into_iter()
        .map(|(name, likes, comments, shares, retweets)| {
            (
                name.to_string(),
                EngagementWeights {
                    likes,
                    comments,
                    shares,
                    retweets,
                },
            )
        })
        .collect();

        let mut optimal_hours = BTreeMap::new();
        for day in ["monday", "tuesday", "wednesday", "thursday"] {
            optimal_hours.insert(day.to_string(), BUSINESS_HOURS.to_vec());
        }
        optimal_hours.insert("friday".to_string(), FRIDAY_HOURS.to_vec());
        optimal_hours.insert("saturday".to_string(), WEEKEND_HOURS.to_vec());
        optimal_hours.insert("sunday".to_string(), WEEKEND_HOURS.to_vec());

        Self {
            positive_words: to_set(POSITIVE_WORDS),
            negative_words: to_set(NEGATIVE_WORDS),
            positive_emoji: to_set(POSITIVE_EMOJI),
            negative_emoji: to_set(NEGATIVE_EMOJI),
            positive_hashtags: to_set(POSITIVE_HASHTAGS),
            negative_hashtags: to_set(NEGATIVE_HASHTAGS),
            fallback_hours: BUSINESS_HOURS.to_vec(),
            golden_hours: vec![10, 11, 12, 18, 19, 20, 21],
            golden_prior: 0.15,
            topics,
            platform_weights,
            optimal_hours,
        }
    }
}

impl Lexicons {
    /// Engagement weights for a platform, falling back to the flat 0.5 profile.
    pub fn engagement_weights(&self, platform: &str) -> EngagementWeights {
        self.platform_weights
            .get(platform)
            .copied()
            .unwrap_or_default()
    }

    pub fn candidate_hours(&self, weekday: Weekday) -> &[u32] {
        self.optimal_hours
            .get(weekday_name(weekday))
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback_hours)
    }

    pub fn golden_prior_for(&self, hour: u32) -> f64 {
        if self.golden_hours.contains(&hour) {
            self.golden_prior
        } else {
            0.0
        }
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn to_set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
