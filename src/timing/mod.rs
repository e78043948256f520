pub mod contact;
pub mod hours;
pub mod trend;
pub mod window;

pub use contact::{
    ContactRecommendation, ContactTimingAnalyzer, ContactUrgency, MoodContext, UrgencyLevel,
};
pub use hours::suggest_hours;
pub use trend::{analyze_mood_trends, MoodTrend, TrendDirection};
pub use window::ContactWindow;
