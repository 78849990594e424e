//! Composite health scores

use super::series::{trailing, WEEK_SPAN};
use crate::common::math;
use crate::models::analytics::PerformanceScores;
use crate::models::record::DailyRecord;

/// Per-day targets behind every score
pub struct DailyTargets;

impl DailyTargets {
    pub const STEPS: f64 = 10_000.0;
    pub const SLEEP_HOURS: f64 = 8.0;
    pub const WATER_GLASSES: f64 = 8.0;
    pub const ACTIVE_MINUTES: f64 = 30.0;
    /// Intake/burn gap still scored as fully balanced
    pub const CALORIE_TOLERANCE: f64 = 500.0;
}

/// Single-day score in [0, 100]: the mean of the capped steps, sleep, water
/// and activity percentages.
pub fn daily_score(record: &DailyRecord) -> u32 {
    let parts = [
        math::capped_percentage(record.steps as f64, DailyTargets::STEPS),
        math::capped_percentage(record.sleep, DailyTargets::SLEEP_HOURS),
        math::capped_percentage(record.water as f64, DailyTargets::WATER_GLASSES),
        math::capped_percentage(record.active as f64, DailyTargets::ACTIVE_MINUTES),
    ];
    math::to_score(math::mean(&parts))
}

/// Calorie balance for one day: 100 inside the tolerance band, then one point
/// lost per 10 kcal of extra gap, floored at 0.
pub fn balance_score(record: &DailyRecord) -> f64 {
    let gap = (record.calories_consumed as f64 - record.calories as f64).abs();
    if gap < DailyTargets::CALORIE_TOLERANCE {
        100.0
    } else {
        (100.0 - (gap - DailyTargets::CALORIE_TOLERANCE) / 10.0).max(0.0)
    }
}

/// Performance scores over the trailing seven records.
///
/// Consistency is the share of the seven days that were logged and is capped
/// at 100 like every other dimension.
pub fn performance_scores(records: &[DailyRecord]) -> PerformanceScores {
    let window = trailing(records, WEEK_SPAN);
    let days = window.len().max(1) as f64;

    let total_steps = sum_of(&window, |r| r.steps as f64);
    let total_active = sum_of(&window, |r| r.active as f64);
    let total_sleep = sum_of(&window, |r| r.sleep);
    let total_water = sum_of(&window, |r| r.water as f64);

    let balances: Vec<f64> = window.iter().map(|&r| balance_score(r)).collect();

    PerformanceScores {
        steps: math::to_score(math::capped_percentage(total_steps, days * DailyTargets::STEPS)),
        exercise: math::to_score(math::capped_percentage(
            total_active,
            days * DailyTargets::ACTIVE_MINUTES,
        )),
        sleep: math::to_score(math::capped_percentage(
            total_sleep,
            days * DailyTargets::SLEEP_HOURS,
        )),
        hydration: math::to_score(math::capped_percentage(
            total_water,
            days * DailyTargets::WATER_GLASSES,
        )),
        consistency: math::to_score(math::capped_percentage(
            window.len() as f64,
            WEEK_SPAN as f64,
        )),
        balance: math::to_score(math::mean(&balances)),
    }
}

fn sum_of(window: &[&DailyRecord], value: impl Fn(&DailyRecord) -> f64) -> f64 {
    window.iter().map(|&r| value(r)).sum()
}
