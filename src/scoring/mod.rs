pub mod day;
pub mod mood;
pub mod weighted;

pub use day::{DayScore, DayScorer};
pub use mood::{MoodPoint, MoodTable, MoodWeights};
pub use weighted::{CalibrationConfig, ScoreWeights, WeightedScorer};
