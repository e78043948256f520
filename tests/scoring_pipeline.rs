use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeMap;
use vibecheck::features::DailyFeatures;
use vibecheck::scoring::{
    CalibrationConfig, DayScore, DayScorer, MoodTable, MoodWeights, ScoreWeights, WeightedScorer,
};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, n).unwrap()
}

fn single_day(features: DailyFeatures) -> BTreeMap<NaiveDate, DailyFeatures> {
    let mut daily = BTreeMap::new();
    daily.insert(day(1), features);
    daily
}

fn default_scorer<'a>(
    daily: &'a BTreeMap<NaiveDate, DailyFeatures>,
    mood: &'a MoodTable,
) -> DayScorer<'a> {
    DayScorer::new(
        daily,
        mood,
        WeightedScorer::new(ScoreWeights::default()),
        CalibrationConfig::default(),
    )
}

fn score_single(features: DailyFeatures) -> DayScore {
    let daily = single_day(features);
    let mood = MoodTable::build(&daily, &MoodWeights::default(), 7);
    default_scorer(&daily, &mood).score_day(day(1))
}

#[test]
fn weighted_scorer_blends_features_and_baseline() {
    let scorer = WeightedScorer::new(ScoreWeights::default());
    let score = scorer.score(&DailyFeatures::uniform(0.5), 0.0);

    let expected = 0.95 * 0.5 + 0.2 * 0.5;
    assert!((score - expected).abs() < 1e-9);
}

#[test]
fn weighted_scorer_applies_mood_delta() {
    let scorer = WeightedScorer::new(ScoreWeights::default());
    let flat = scorer.score(&DailyFeatures::uniform(0.5), 0.0);
    let lifted = scorer.score(&DailyFeatures::uniform(0.5), 0.25);

    assert!((lifted - flat - 0.2 * 0.8 * 0.25).abs() < 1e-9);
}

#[test]
fn platform_signal_weight_is_reserved() {
    let features = DailyFeatures::uniform(0.7);
    let default_scorer = WeightedScorer::new(ScoreWeights::default());
    let heavy_scorer = WeightedScorer::new(ScoreWeights {
        platform_signal: 5.0,
        ..ScoreWeights::default()
    });

    let a = default_scorer.score(&features, 0.1);
    let b = heavy_scorer.score(&features, 0.1);
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn missing_day_scores_neutral() {
    let daily = single_day(DailyFeatures::uniform(0.9));
    let mood = MoodTable::build(&daily, &MoodWeights::default(), 7);

    let score = default_scorer(&daily, &mood).score_day(day(20));
    assert_eq!(score, DayScore::neutral());
    assert!((score.score - 50.0).abs() < 1e-9);
    assert!((score.probability - 0.5).abs() < 1e-9);
}

#[test]
fn neutral_day_calibrates_below_half() {
    // composite 0.575, probability sigmoid(3 * -0.025)
    let score = score_single(DailyFeatures::uniform(0.5));

    let expected = 1.0 / (1.0 + (0.075f64).exp());
    assert!((score.probability - expected).abs() < 1e-9);
    assert!((score.score - 48.1).abs() < 1e-9);
}

#[test]
fn score_rounds_to_one_decimal() {
    let score = DayScore::from_probability(0.73456);
    assert!((score.score - 73.5).abs() < 1e-9);

    let clamped = DayScore::from_probability(1.4);
    assert!((clamped.probability - 1.0).abs() < 1e-12);
    assert!((clamped.score - 100.0).abs() < 1e-9);
}

#[test]
fn score_is_monotonic_in_each_feature() {
    let mut rng = StdRng::seed_from_u64(42);
    let bump = 0.1;

    for _ in 0..200 {
        let base = DailyFeatures {
            post_count: 1,
            sentiment: rng.gen::<f64>(),
            emoji: rng.gen::<f64>(),
            hashtags: rng.gen::<f64>(),
            engagement: rng.gen::<f64>(),
            context: rng.gen::<f64>(),
            cadence: rng.gen::<f64>(),
            time_of_day: rng.gen::<f64>(),
            likes_z: 0.0,
            comments_z: 0.0,
            shares_z: 0.0,
        };
        let before = score_single(base.clone());

        let variants: Vec<DailyFeatures> = vec![
            DailyFeatures { sentiment: (base.sentiment + bump).min(1.0), ..base.clone() },
            DailyFeatures { emoji: (base.emoji + bump).min(1.0), ..base.clone() },
            DailyFeatures { hashtags: (base.hashtags + bump).min(1.0), ..base.clone() },
            DailyFeatures { engagement: (base.engagement + bump).min(1.0), ..base.clone() },
            DailyFeatures { context: (base.context + bump).min(1.0), ..base.clone() },
            DailyFeatures { cadence: (base.cadence + bump).min(1.0), ..base.clone() },
            DailyFeatures { time_of_day: (base.time_of_day + bump).min(1.0), ..base.clone() },
        ];

        for variant in variants {
            let after = score_single(variant);
            assert!(after.probability >= before.probability - 1e-12);
            assert!(after.score >= before.score);
        }
    }
}

#[test]
fn mood_baseline_averages_preceding_days() {
    let mut daily = BTreeMap::new();
    daily.insert(day(1), DailyFeatures::uniform(0.2));
    daily.insert(day(2), DailyFeatures::uniform(0.4));
    daily.insert(day(5), DailyFeatures::uniform(0.9));

    let mood = MoodTable::build(&daily, &MoodWeights::default(), 7);
    let first = mood.get(day(1)).unwrap();
    let last = mood.get(day(5)).unwrap();

    assert!((first.baseline - 0.5).abs() < 1e-9);
    assert!((last.mood_index - 0.9).abs() < 1e-9);
    assert!((last.baseline - 0.3).abs() < 1e-9);
    assert!((last.delta() - 0.6).abs() < 1e-9);

    let narrow = MoodTable::build(&daily, &MoodWeights::default(), 1);
    assert!((narrow.get(day(5)).unwrap().baseline - 0.4).abs() < 1e-9);
}

#[test]
fn rising_mood_scores_above_flat_history() {
    let mut flat = BTreeMap::new();
    let mut rising = BTreeMap::new();
    for n in 1..=5 {
        flat.insert(day(n), DailyFeatures::uniform(0.6));
        let level = if n == 5 { 0.6 } else { 0.2 };
        rising.insert(day(n), DailyFeatures::uniform(level));
    }

    let weights = MoodWeights::default();
    let flat_mood = MoodTable::build(&flat, &weights, 7);
    let rising_mood = MoodTable::build(&rising, &weights, 7);

    let flat_score = default_scorer(&flat, &flat_mood).score_day(day(5));
    let rising_score = default_scorer(&rising, &rising_mood).score_day(day(5));
    assert!(rising_score.probability > flat_score.probability);
}
