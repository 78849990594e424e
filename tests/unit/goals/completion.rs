//! Unit tests for daily goal completion

use chrono::NaiveDate;
use fitdash::goals::{daily_goal_completion, default_goals, is_satisfied};
use fitdash::models::goal::{Goal, GoalType, NewGoal};
use fitdash::models::record::DailyRecord;

fn goals(types: &[GoalType]) -> Vec<Goal> {
    types
        .iter()
        .enumerate()
        .map(|(i, &t)| NewGoal::new(t, 1.0).into_goal(i as i64 + 1))
        .collect()
}

fn record() -> DailyRecord {
    DailyRecord::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
}

const DAILY: [GoalType; 4] = [
    GoalType::DailySteps,
    GoalType::DailyCaloriesBurn,
    GoalType::DailyWater,
    GoalType::DailySleep,
];

#[test]
fn test_all_daily_goals_met() {
    let day = record()
        .with_steps(10_000)
        .with_calories(500, 0)
        .with_water(8)
        .with_sleep(7.0);
    assert_eq!(daily_goal_completion(&day, &goals(&DAILY)), 4);
}

#[test]
fn test_sleep_threshold_is_seven_hours() {
    assert!(is_satisfied(GoalType::DailySleep, &record().with_sleep(7.5)));
    assert!(!is_satisfied(GoalType::DailySleep, &record().with_sleep(6.9)));
}

#[test]
fn test_just_below_thresholds() {
    let day = record()
        .with_steps(9_999)
        .with_calories(499, 0)
        .with_water(7)
        .with_sleep(6.99);
    assert_eq!(daily_goal_completion(&day, &goals(&DAILY)), 0);
}

#[test]
fn test_only_goals_in_set_count() {
    let day = record().with_steps(12_000).with_water(10);
    assert_eq!(daily_goal_completion(&day, &goals(&[GoalType::DailySteps])), 1);
    assert_eq!(daily_goal_completion(&day, &[]), 0);
}

#[test]
fn test_duplicate_and_non_daily_goals() {
    let day = record().with_steps(12_000).with_active(300);
    let set = goals(&[
        GoalType::DailySteps,
        GoalType::DailySteps,
        GoalType::WeeklyExercise,
        GoalType::WeightLoss,
    ]);
    assert_eq!(daily_goal_completion(&day, &set), 1);
}

#[test]
fn test_default_goal_set() {
    let defaults = default_goals();
    assert_eq!(defaults.len(), 6);
    let weight = defaults
        .iter()
        .find(|g| g.goal_type == GoalType::WeightLoss)
        .unwrap();
    assert_eq!(weight.target_value, 70.0);
    assert_eq!(weight.current_value, 75.0);
    assert!(defaults.iter().all(|g| g.target_value > 0.0));
}
