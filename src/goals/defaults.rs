//! Goal set inserted into an empty store

use crate::models::goal::{GoalType, NewGoal};

pub fn default_goals() -> Vec<NewGoal> {
    vec![
        NewGoal::new(GoalType::DailySteps, 10_000.0),
        NewGoal::new(GoalType::DailyCaloriesBurn, 500.0),
        NewGoal::new(GoalType::DailyWater, 8.0),
        NewGoal::new(GoalType::DailySleep, 8.0),
        NewGoal::new(GoalType::WeeklyExercise, 150.0),
        NewGoal::new(GoalType::WeightLoss, 70.0).with_current_value(75.0),
    ]
}
