//! Unit tests for the chart summary bundle

use chrono::{Days, NaiveDate};
use fitdash::analytics::{daily_score, performance_scores, summarize};
use fitdash::models::record::DailyRecord;

fn records() -> Vec<DailyRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut records: Vec<DailyRecord> = (0..5u32)
        .map(|i| {
            DailyRecord::new(start + Days::new(i as u64))
                .with_steps(4_000 + i * 1_000)
                .with_water(i + 4)
                .with_sleep(7.0)
                .with_active(20 + i)
        })
        .collect();
    records.reverse();
    records
}

#[test]
fn test_series_are_aligned_and_ascending() {
    let records = records();
    let summary = summarize(&records, 3);

    assert_eq!(summary.dates.len(), 5);
    assert!(summary.dates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(summary.daily_scores.len(), 5);
    assert_eq!(summary.moving_averages.steps.len(), 5);
    assert_eq!(summary.moving_averages.water.len(), 5);
    assert_eq!(summary.moving_averages.steps, vec![4000, 4500, 5000, 6000, 7000]);
}

#[test]
fn test_summary_matches_engine_functions() {
    let records = records();
    let summary = summarize(&records, 7);

    assert_eq!(summary.performance_scores, performance_scores(&records).as_array());
    let oldest = records.last().unwrap();
    assert_eq!(summary.daily_scores[0].date, oldest.date);
    assert_eq!(summary.daily_scores[0].score, daily_score(oldest));
    assert_eq!(summary.weekly_averages.steps, 6000.0);
    assert_eq!(summary.weekly_averages.sleep, 7.0);
}

#[test]
fn test_zero_window_is_reported_as_one() {
    assert_eq!(summarize(&records(), 0).moving_averages.window, 1);
}
