pub mod extractor;
pub mod golden;
pub mod text;

pub use extractor::{cadence_score, time_of_day_score, DailyFeatures, FeatureExtractor, FeatureSet};
pub use golden::{GoldenHourTable, HOURS_PER_DAY};
pub use text::{extract_emoji, extract_hashtags, tokenize, topic_scores, PostSignals};
