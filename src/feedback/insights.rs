//! Trend insights over the trailing week

use crate::analytics::series::{trailing, WEEK_SPAN};
use crate::common::math;
use crate::models::feedback::{Insight, Trend};
use crate::models::record::DailyRecord;

pub const STEP_TREND_TITLE: &str = "Step Trend";
pub const MOOD_AVERAGE_TITLE: &str = "Mood Average";

/// Change in steps from the first to the last record of the window.
/// Needs at least two records.
pub fn step_trend(window: &[&DailyRecord]) -> Option<Insight> {
    if window.len() < 2 {
        return None;
    }
    let first = window.first()?;
    let last = window.last()?;
    let change = last.steps as i64 - first.steps as i64;

    let trend = match change.signum() {
        1 => Trend::Positive,
        -1 => Trend::Negative,
        _ => Trend::Neutral,
    };
    let value = if change > 0 {
        format!("+{}", change)
    } else {
        change.to_string()
    };

    Some(Insight {
        title: STEP_TREND_TITLE.to_string(),
        value,
        trend,
    })
}

/// Mean mood over the window, to one decimal
pub fn mood_average(window: &[&DailyRecord]) -> Option<Insight> {
    if window.is_empty() {
        return None;
    }
    let moods: Vec<f64> = window.iter().map(|r| r.mood as f64).collect();
    let average = math::round_to(math::mean(&moods), 1);

    let trend = if average >= 4.0 {
        Trend::Positive
    } else if average >= 3.0 {
        Trend::Neutral
    } else {
        Trend::Negative
    };

    Some(Insight {
        title: MOOD_AVERAGE_TITLE.to_string(),
        value: format!("{:.1}", average),
        trend,
    })
}

/// All insights available for the trailing week of `records`
pub fn insights(records: &[DailyRecord]) -> Vec<Insight> {
    let window = trailing(records, WEEK_SPAN);
    [step_trend(&window), mood_average(&window)]
        .into_iter()
        .flatten()
        .collect()
}
