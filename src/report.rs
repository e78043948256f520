use crate::{format_float, Analysis};

const TOP_GOLDEN_HOURS: usize = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub contact: bool,
    pub verbose: bool,
}

pub fn render(analysis: &Analysis, options: &ReportOptions) -> String {
    let mut lines = vec![
        "=== VIBECHECK ANALYSIS ===".to_string(),
        format!("Date: {}", analysis.target_date.format("%Y-%m-%d")),
        format!(
            "Reachability Score: {}/100",
            format_float(analysis.day_score.score, 1)
        ),
        format!(
            "Probability: {}",
            format_float(analysis.day_score.probability, 2)
        ),
    ];

    if analysis.suggested_windows.is_empty() {
        lines.push(String::new());
        lines.push("Suggested contact windows: none".to_string());
    } else {
        lines.push(String::new());
        lines.push("Suggested contact windows:".to_string());
        for window in &analysis.suggested_windows {
            lines.push(format!("  {} – {}", window.start(), window.end()));
        }
    }

    if options.contact {
        render_contact(analysis, &mut lines);
    }
    if options.verbose {
        render_details(analysis, &mut lines);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn render_contact(analysis: &Analysis, lines: &mut Vec<String>) {
    let recommendation = &analysis.recommendation;
    let hours: Vec<String> = recommendation
        .best_hours
        .iter()
        .map(|window| window.to_string())
        .collect();

    lines.push(String::new());
    lines.push("=== CONTACT TIMING ANALYSIS ===".to_string());
    lines.push(format!(
        "Best contact day: {}",
        recommendation.best_day.format("%Y-%m-%d")
    ));
    lines.push(format!("Optimal hours: {}", hours.join(", ")));
    lines.push(format!(
        "Confidence: {}",
        format_float(recommendation.confidence, 2)
    ));
    lines.push(format!("Urgency: {}", recommendation.urgency_level.label()));
    lines.push(format!("Mood context: {}", recommendation.mood_context.label()));
    lines.push(format!("Reasoning: {}", recommendation.reasoning));

    let trend = &analysis.trend;
    lines.push(String::new());
    lines.push(format!("Mood trends (last {} days):", trend.days_back));
    lines.push(format!("  Trend: {}", trend.trend.label()));
    lines.push(format!("  Volatility: {}", format_float(trend.volatility, 2)));
    lines.push(format!("  Consistency: {}", format_float(trend.consistency, 2)));
    lines.push(format!(
        "  Recent average: {}",
        format_float(trend.recent_avg, 2)
    ));
}

fn render_details(analysis: &Analysis, lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push("=== DETAILED ANALYSIS ===".to_string());

    if let Some(day) = analysis.features.get(analysis.target_date) {
        let rows = [
            ("sentiment", day.sentiment),
            ("emoji", day.emoji),
            ("hashtags", day.hashtags),
            ("cadence", day.cadence),
            ("engagement", day.engagement),
            ("time_of_day", day.time_of_day),
            ("context", day.context),
            ("likes_z", day.likes_z),
            ("comments_z", day.comments_z),
            ("shares_z", day.shares_z),
        ];
        for (name, value) in rows {
            lines.push(format!("{}: {}", name, format_float(value, 3)));
        }
    }

    let snapshot = &analysis.snapshot;
    lines.push(String::new());
    lines.push("Mood snapshot:".to_string());
    lines.push(format!(
        "  Overall score: {}",
        format_float(snapshot.overall_score, 1)
    ));
    lines.push(format!(
        "  Sentiment trend: {}",
        snapshot.sentiment_trend.label()
    ));
    lines.push(format!(
        "  Engagement pattern: {}",
        snapshot.engagement_pattern.label()
    ));
    lines.push(format!("  Social energy: {}", snapshot.social_energy.label()));
    let times: Vec<String> = snapshot
        .optimal_contact_times
        .iter()
        .map(|window| window.to_string())
        .collect();
    lines.push(format!("  Optimal contact times: {}", times.join(", ")));
    lines.push(format!(
        "  Mood volatility: {}",
        format_float(snapshot.mood_volatility, 2)
    ));

    lines.push(String::new());
    lines.push(format!("Top {} golden hours:", TOP_GOLDEN_HOURS));
    for (hour, score) in analysis.features.golden.top(TOP_GOLDEN_HOURS) {
        lines.push(format!("  {:02}:00: {}", hour, format_float(score, 3)));
    }
}
