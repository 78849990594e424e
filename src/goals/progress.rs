//! Goal progress percentage

use crate::common::math;
use crate::models::analytics::GoalProgress;
use crate::models::goal::Goal;

/// Completion percentage of `goal`, capped at 100 for display.
///
/// A non-positive target reads as 0%. The stored status is never touched.
pub fn goal_progress(goal: &Goal) -> GoalProgress {
    let percentage = if goal.target_value > 0.0 {
        math::capped_percentage(goal.current_value, goal.target_value)
    } else {
        0.0
    };

    GoalProgress {
        percentage,
        is_completed: percentage >= 100.0,
    }
}
