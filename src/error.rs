use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VibecheckError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid post data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("post {index}: invalid timestamp {value:?}")]
    Timestamp { index: usize, value: String },

    #[error("post {index}: {field} must be a non-negative integer, got {value}")]
    Counter {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    Date(String),
}

pub type Result<T> = std::result::Result<T, VibecheckError>;
