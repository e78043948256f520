use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, VibecheckError};

const DEFAULT_PLATFORM: &str = "other";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A post record as it appears in the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub platform: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub text: String,
    pub likes: Option<f64>,
    pub comments: Option<f64>,
    pub shares: Option<f64>,
    pub retweets: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub platform: String,
    pub timestamp: NaiveDateTime,
    pub text: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub retweets: u64,
}

impl Post {
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

impl RawPost {
    pub fn normalize(self, index: usize) -> Result<Post> {
        let timestamp =
            parse_timestamp(&self.timestamp).ok_or_else(|| VibecheckError::Timestamp {
                index,
                value: self.timestamp.clone(),
            })?;
        let platform = self
            .platform
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string())
            .to_lowercase();

        Ok(Post {
            platform,
            timestamp,
            text: self.text,
            likes: counter(index, "likes", self.likes)?,
            comments: counter(index, "comments", self.comments)?,
            shares: counter(index, "shares", self.shares)?,
            retweets: counter(index, "retweets", self.retweets)?,
        })
    }
}

/// Parses a JSON array of post records into posts sorted by timestamp.
pub fn parse_posts(json: &str) -> Result<Vec<Post>> {
    let raw: Vec<RawPost> = serde_json::from_str(json)?;
    normalize_posts(raw)
}

pub fn normalize_posts(raw: Vec<RawPost>) -> Result<Vec<Post>> {
    let mut posts = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.normalize(index))
        .collect::<Result<Vec<_>>>()?;
    posts.sort_by_key(|post| post.timestamp);
    debug!(count = posts.len(), "normalized posts");
    Ok(posts)
}

pub fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let contents = std::fs::read_to_string(path).map_err(|source| VibecheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_posts(&contents)
}

/// Accepts RFC 3339 (keeping the wall-clock time of its offset), naive
/// date-times with `T` or space separators, and bare dates.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Counters beyond `u64::MAX` saturate.
fn counter(index: usize, field: &'static str, value: Option<f64>) -> Result<u64> {
    match value {
        None => Ok(0),
        Some(value) if value.is_finite() && value >= 0.0 => Ok(value.trunc() as u64),
        Some(value) => Err(VibecheckError::Counter {
            index,
            field,
            value,
        }),
    }
}
