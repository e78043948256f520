use chrono::NaiveDate;
use vibecheck::config::VibecheckConfig;
use vibecheck::posts::parse_posts;
use vibecheck::report::{render, ReportOptions};
use vibecheck::summary::{EngagementPattern, SocialEnergy};
use vibecheck::timing::UrgencyLevel;
use vibecheck::{analyze, parse_date};

const TWO_POSTS: &str = r#"[
    {"timestamp": "2024-03-01T10:00:00", "text": "amazing day #blessed 🎉", "likes": 100, "comments": 50},
    {"timestamp": "2024-03-01T22:00:00", "text": "tired and sad", "likes": 1, "comments": 0}
]"#;

const WEEK: &str = r#"[
    {"platform": "twitter", "timestamp": "2024-02-26T09:12:00", "text": "Deadline pressure again #mondayblues", "likes": 2},
    {"platform": "twitter", "timestamp": "2024-02-27T19:40:00", "text": "Great workout at the gym 💪", "likes": 14, "retweets": 1},
    {"platform": "instagram", "timestamp": "2024-02-28T12:05:00", "text": "Lunch with friends, so grateful #grateful", "likes": 40, "comments": 6},
    {"platform": "instagram", "timestamp": "2024-02-28T20:30:00", "text": "Sunset walk ✨", "likes": 31},
    {"platform": "linkedin", "timestamp": "2024-02-29T10:15:00", "text": "Proud of the team launch!", "likes": 80, "comments": 12, "shares": 4},
    {"platform": "facebook", "timestamp": "2024-03-01T21:00:00", "text": "tired, stressed and lonely 😢 #burnout", "likes": 0},
    {"platform": "tiktok", "timestamp": "2024-03-02T11:00:00", "text": "Dance practice with music", "likes": 300, "shares": 20}
]"#;

fn date(value: &str) -> NaiveDate {
    parse_date(value).unwrap()
}

#[test]
fn mixed_day_keeps_positive_lead() {
    let posts = parse_posts(TWO_POSTS).unwrap();
    let analysis = analyze(&posts, None, &VibecheckConfig::default());

    assert_eq!(analysis.target_date, date("2024-03-01"));
    let day = analysis.features.get(analysis.target_date).unwrap();
    // "amazing" and the #blessed token tie "tired" and "sad"
    assert!(day.sentiment >= 0.5);
    assert!(day.emoji > 0.5);
    assert!(day.hashtags > 0.5);
    assert!((day.engagement - 0.75).abs() < 1e-9);

    assert!(matches!(
        analysis.recommendation.urgency_level,
        UrgencyLevel::Minimal | UrgencyLevel::Low
    ));
}

#[test]
fn default_target_is_latest_post_day() {
    let posts = parse_posts(WEEK).unwrap();
    let analysis = analyze(&posts, None, &VibecheckConfig::default());

    assert_eq!(analysis.target_date, date("2024-03-02"));
    assert_eq!(analysis.features.daily.len(), 6);
    assert_eq!(analysis.suggested_windows.len(), 3);
}

#[test]
fn negative_day_raises_urgency() {
    let posts = parse_posts(WEEK).unwrap();
    let config = VibecheckConfig::default();

    let low = analyze(&posts, Some(date("2024-03-01")), &config);
    let high = analyze(&posts, Some(date("2024-02-29")), &config);

    assert!(low.day_score.probability < high.day_score.probability);
    let day = low.features.get(low.target_date).unwrap();
    assert!(day.sentiment < 0.5);
    assert!(day.emoji < 0.5);
    assert!(day.hashtags < 0.5);
}

#[test]
fn pipeline_is_deterministic() {
    let posts = parse_posts(WEEK).unwrap();
    let config = VibecheckConfig::default();
    let options = ReportOptions {
        contact: true,
        verbose: true,
    };
    let target = Some(date("2024-02-28"));

    let first = analyze(&posts, target, &config);
    let second = analyze(&posts, target, &config);

    assert_eq!(render(&first, &options), render(&second, &options));
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn missing_target_date_uses_neutral_defaults() {
    let posts = parse_posts(WEEK).unwrap();
    let analysis = analyze(&posts, Some(date("2024-05-20")), &VibecheckConfig::default());

    assert_eq!(analysis.day_score.score, 50.0);
    assert_eq!(analysis.day_score.probability, 0.5);
    assert_eq!(analysis.snapshot.social_energy, SocialEnergy::Unknown);
    assert_eq!(analysis.snapshot.engagement_pattern, EngagementPattern::Unknown);

    let report = render(
        &analysis,
        &ReportOptions {
            contact: true,
            verbose: false,
        },
    );
    assert!(report.contains("Reachability Score: 50.0/100"));
    assert!(report.contains("Probability: 0.50"));
    assert!(report.contains("Urgency: unknown"));
    assert!(report.contains("Mood context: unknown"));
    assert!(report.contains("Reasoning: No data available for this date"));
}

#[test]
fn empty_history_still_reports() {
    let analysis = analyze(&[], Some(date("2024-03-04")), &VibecheckConfig::default());

    assert!(analysis.features.daily.is_empty());
    assert_eq!(analysis.day_score.score, 50.0);
    let starts: Vec<u32> = analysis
        .suggested_windows
        .iter()
        .map(|window| window.start_hour)
        .collect();
    assert_eq!(starts, vec![10, 11, 12]);
}

#[test]
fn report_sections_follow_flags() {
    let posts = parse_posts(TWO_POSTS).unwrap();
    let analysis = analyze(&posts, None, &VibecheckConfig::default());

    let plain = render(&analysis, &ReportOptions::default());
    assert!(plain.starts_with("=== VIBECHECK ANALYSIS ===\nDate: 2024-03-01\n"));
    assert!(plain.contains("Suggested contact windows:\n  "));
    assert!(!plain.contains("CONTACT TIMING"));
    assert!(!plain.contains("DETAILED ANALYSIS"));

    let full = render(
        &analysis,
        &ReportOptions {
            contact: true,
            verbose: true,
        },
    );
    assert!(full.contains("=== CONTACT TIMING ANALYSIS ==="));
    assert!(full.contains("Best contact day: 2024-03-01"));
    assert!(full.contains("Mood trends (last 30 days):"));
    assert!(full.contains("  Trend: insufficient_data"));
    assert!(full.contains("sentiment: 0.500"));
    assert!(full.contains("emoji: 0.600"));
    assert!(full.contains("  Optimal contact times: 10:00-11:30, 11:00-12:30, 12:00-13:30"));
    assert!(full.contains("Top 8 golden hours:"));
    assert!(full.contains("  10:00: 1.150"));
}
