use std::cmp::Ordering;

use crate::features::{GoldenHourTable, HOURS_PER_DAY};
use crate::posts::Post;
use crate::timing::ContactWindow;

/// Ranks all 24 hours by golden score minus a penalty proportional to how
/// often the person already posts at that hour.
pub fn suggest_hours(
    golden: &GoldenHourTable,
    posts: &[Post],
    top_k: usize,
    saturation_penalty: f64,
) -> Vec<ContactWindow> {
    let mut by_hour = [0u32; HOURS_PER_DAY];
    for post in posts {
        by_hour[post.hour() as usize] += 1;
    }
    let max_count = by_hour.iter().copied().max().filter(|max| *max > 0).unwrap_or(1) as f64;

    let mut ranked: Vec<(u32, f64)> = (0..HOURS_PER_DAY as u32)
        .map(|hour| {
            let load = by_hour[hour as usize] as f64 / max_count;
            (hour, golden.get(hour) - load * saturation_penalty)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(top_k)
        .map(|(hour, _)| ContactWindow::for_hour(hour))
        .collect()
}
