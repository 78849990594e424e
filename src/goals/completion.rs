//! Daily goal completion against a single record

use std::collections::HashSet;

use crate::models::goal::{Goal, GoalType};
use crate::models::record::DailyRecord;

/// Fixed thresholds used to call a daily goal met.
///
/// The sleep threshold is 7 hours even though scoring targets 8.
pub struct CompletionThresholds;

impl CompletionThresholds {
    pub const STEPS: u32 = 10_000;
    pub const CALORIES_BURNED: u32 = 500;
    pub const WATER_GLASSES: u32 = 8;
    pub const SLEEP_HOURS: f64 = 7.0;
}

/// Whether `record` meets the threshold for `goal_type`.
/// Non-daily goal types are never satisfied by one day.
pub fn is_satisfied(goal_type: GoalType, record: &DailyRecord) -> bool {
    match goal_type {
        GoalType::DailySteps => record.steps >= CompletionThresholds::STEPS,
        GoalType::DailyCaloriesBurn => record.calories >= CompletionThresholds::CALORIES_BURNED,
        GoalType::DailyWater => record.water >= CompletionThresholds::WATER_GLASSES,
        GoalType::DailySleep => record.sleep >= CompletionThresholds::SLEEP_HOURS,
        GoalType::WeeklyExercise | GoalType::WeightLoss | GoalType::WeightGain => false,
    }
}

/// Number of distinct daily goal types in `goals` that `record` satisfies
pub fn daily_goal_completion(record: &DailyRecord, goals: &[Goal]) -> usize {
    let types: HashSet<GoalType> = goals
        .iter()
        .map(|g| g.goal_type)
        .filter(GoalType::is_daily)
        .collect();

    types
        .into_iter()
        .filter(|&t| is_satisfied(t, record))
        .count()
}
