//! Unit tests for feedback generation

use chrono::{Days, NaiveDate};
use fitdash::feedback::{generate_feedback, insights, MOOD_AVERAGE_TITLE, STEP_TREND_TITLE};
use fitdash::models::feedback::{Insight, Trend};
use fitdash::models::record::DailyRecord;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + Days::new(offset)
}

fn find<'a>(insights: &'a [Insight], title: &str) -> Option<&'a Insight> {
    insights.iter().find(|i| i.title == title)
}

#[test]
fn test_empty_history_does_not_fail() {
    let feedback = generate_feedback(&[]);
    assert_eq!(feedback.overall_score, 0);
    assert_eq!(feedback.scores.activity, 0);
    assert_eq!(feedback.scores.sleep, 0);
    assert_eq!(feedback.scores.consistency, 0);
    assert_eq!(feedback.recommendations.len(), 4);
    assert!(feedback.insights.is_empty());
}

#[test]
fn test_perfect_week() {
    let records: Vec<DailyRecord> = (0..7)
        .map(|i| {
            DailyRecord::new(day(i))
                .with_steps(10_000)
                .with_sleep(8.0)
                .with_water(8)
                .with_active(30)
                .with_mood(4)
        })
        .collect();

    let feedback = generate_feedback(&records);
    assert_eq!(feedback.overall_score, 100);
    assert_eq!(feedback.scores.activity, 100);
    assert!(feedback.recommendations.is_empty());
}

#[test]
fn test_overall_is_mean_of_six_scores() {
    let records: Vec<DailyRecord> = (0..3)
        .map(|i| {
            DailyRecord::new(day(i))
                .with_steps(5_000)
                .with_sleep(4.0)
                .with_water(4)
                .with_active(15)
        })
        .collect();

    let feedback = generate_feedback(&records);
    // [50, 50, 50, 50, 43, 100] -> 343 / 6
    assert_eq!(feedback.overall_score, 57);
    assert_eq!(feedback.scores.activity, 50);
    assert_eq!(feedback.scores.consistency, 43);
}

#[test]
fn test_step_trend_positive() {
    let records = vec![
        DailyRecord::new(day(1)).with_steps(3_000),
        DailyRecord::new(day(0)).with_steps(1_000),
    ];
    let insights = insights(&records);
    let trend = find(&insights, STEP_TREND_TITLE).expect("step trend");
    assert_eq!(trend.value, "+2000");
    assert_eq!(trend.trend, Trend::Positive);
}

#[test]
fn test_step_trend_negative_and_flat() {
    let falling = vec![
        DailyRecord::new(day(0)).with_steps(8_000),
        DailyRecord::new(day(1)).with_steps(6_000),
    ];
    let flat = vec![
        DailyRecord::new(day(0)).with_steps(8_000),
        DailyRecord::new(day(1)).with_steps(8_000),
    ];

    let falling = insights(&falling);
    let falling = find(&falling, STEP_TREND_TITLE).unwrap();
    assert_eq!(falling.value, "-2000");
    assert_eq!(falling.trend, Trend::Negative);

    let flat = insights(&flat);
    let flat = find(&flat, STEP_TREND_TITLE).unwrap();
    assert_eq!(flat.value, "0");
    assert_eq!(flat.trend, Trend::Neutral);
}

#[test]
fn test_step_trend_needs_two_records() {
    let single = vec![DailyRecord::new(day(0)).with_steps(8_000)];
    let insights = insights(&single);
    assert!(find(&insights, STEP_TREND_TITLE).is_none());
    assert!(find(&insights, MOOD_AVERAGE_TITLE).is_some());
}

#[test]
fn test_step_trend_uses_trailing_week() {
    let records: Vec<DailyRecord> = (0..10)
        .map(|i| DailyRecord::new(day(i)).with_steps(1_000 * (i as u32 + 1)))
        .collect();
    let insights = insights(&records);
    // window spans days 3..=9: 4000 -> 10000
    assert_eq!(find(&insights, STEP_TREND_TITLE).unwrap().value, "+6000");
}

#[test]
fn test_mood_average_classification() {
    let cases = [
        (vec![4, 5], "4.5", Trend::Positive),
        (vec![3, 3], "3.0", Trend::Neutral),
        (vec![1, 2], "1.5", Trend::Negative),
        (vec![3, 4, 4], "3.7", Trend::Neutral),
    ];

    for (moods, value, trend) in cases {
        let records: Vec<DailyRecord> = moods
            .iter()
            .enumerate()
            .map(|(i, &m)| DailyRecord::new(day(i as u64)).with_mood(m))
            .collect();
        let insights = insights(&records);
        let mood = find(&insights, MOOD_AVERAGE_TITLE).unwrap();
        assert_eq!(mood.value, value);
        assert_eq!(mood.trend, trend);
    }
}
