//! Dashboard header statistics

use chrono::{Days, NaiveDate};

use super::series::WEEK_SPAN;
use crate::common::math;
use crate::models::analytics::{DashboardStats, WeekStats};
use crate::models::record::DailyRecord;

/// Minimum steps for a day to extend the streak
pub const STREAK_MIN_STEPS: u32 = 5_000;

/// Stats for the dashboard header as of `today`.
///
/// The week covers records dated from seven days before `today` up to
/// `today`, newest first, at most seven of them. The streak counts
/// consecutive days from the newest record with at least
/// [`STREAK_MIN_STEPS`] steps.
pub fn dashboard_stats(records: &[DailyRecord], today: NaiveDate) -> DashboardStats {
    let cutoff = today
        .checked_sub_days(Days::new(WEEK_SPAN as u64))
        .unwrap_or(NaiveDate::MIN);

    let mut week_data: Vec<DailyRecord> = records
        .iter()
        .filter(|r| r.date >= cutoff && r.date <= today)
        .cloned()
        .collect();
    week_data.sort_by(|a, b| b.date.cmp(&a.date));
    week_data.truncate(WEEK_SPAN);

    let total_steps: u64 = week_data.iter().map(|r| r.steps as u64).sum();
    let avg_steps =
        math::round(math::safe_ratio(total_steps as f64, week_data.len().max(1) as f64)) as u64;
    let streak = week_data
        .iter()
        .take_while(|r| r.steps >= STREAK_MIN_STEPS)
        .count();

    DashboardStats {
        today: records.iter().find(|r| r.date == today).cloned(),
        stats: WeekStats {
            total_steps,
            avg_steps,
            streak,
            days_logged: week_data.len(),
        },
        week_data,
    }
}
