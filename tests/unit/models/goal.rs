//! Unit tests for goal partial updates

use chrono::NaiveDate;
use fitdash::models::goal::{GoalStatus, GoalType, GoalUpdate, NewGoal};
use serde_json::json;

fn goal_with_deadline() -> fitdash::models::Goal {
    let mut goal = NewGoal::new(GoalType::DailySteps, 10_000.0).into_goal(1);
    goal.deadline = NaiveDate::from_ymd_opt(2025, 1, 31);
    goal
}

#[test]
fn test_absent_deadline_keeps_stored_value() {
    let mut goal = goal_with_deadline();
    let update: GoalUpdate = serde_json::from_value(json!({ "current_value": 4000 })).unwrap();
    update.apply(&mut goal);

    assert_eq!(goal.current_value, 4000.0);
    assert_eq!(goal.deadline, NaiveDate::from_ymd_opt(2025, 1, 31));
}

#[test]
fn test_null_deadline_clears_it() {
    let mut goal = goal_with_deadline();
    let update: GoalUpdate = serde_json::from_value(json!({ "deadline": null })).unwrap();
    assert_eq!(update.deadline, Some(None));
    update.apply(&mut goal);

    assert!(goal.deadline.is_none());
    assert_eq!(goal.target_value, 10_000.0);
}

#[test]
fn test_new_deadline_replaces_it() {
    let mut goal = goal_with_deadline();
    let update: GoalUpdate = serde_json::from_value(json!({
        "deadline": "2025-06-30",
        "status": "completed",
    }))
    .unwrap();
    update.apply(&mut goal);

    assert_eq!(goal.deadline, NaiveDate::from_ymd_opt(2025, 6, 30));
    assert_eq!(goal.status, GoalStatus::Completed);
}
