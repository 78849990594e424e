//! Goal entity and its request shapes

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    DailySteps,
    DailyCaloriesBurn,
    DailyWater,
    DailySleep,
    WeeklyExercise,
    WeightLoss,
    WeightGain,
}

impl GoalType {
    pub const ALL: [GoalType; 7] = [
        GoalType::DailySteps,
        GoalType::DailyCaloriesBurn,
        GoalType::DailyWater,
        GoalType::DailySleep,
        GoalType::WeeklyExercise,
        GoalType::WeightLoss,
        GoalType::WeightGain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::DailySteps => "daily_steps",
            GoalType::DailyCaloriesBurn => "daily_calories_burn",
            GoalType::DailyWater => "daily_water",
            GoalType::DailySleep => "daily_sleep",
            GoalType::WeeklyExercise => "weekly_exercise",
            GoalType::WeightLoss => "weight_loss",
            GoalType::WeightGain => "weight_gain",
        }
    }

    /// Goals checked against a single day's record
    pub fn is_daily(&self) -> bool {
        matches!(
            self,
            GoalType::DailySteps
                | GoalType::DailyCaloriesBurn
                | GoalType::DailyWater
                | GoalType::DailySleep
        )
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown goal type: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Abandoned,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(GoalStatus::Active),
            "completed" => Ok(GoalStatus::Completed),
            "abandoned" => Ok(GoalStatus::Abandoned),
            other => Err(format!("unknown goal status: {}", other)),
        }
    }
}

/// Stored goal. Status only changes through explicit updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub goal_type: GoalType,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: GoalStatus,
}

/// Goal awaiting insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    pub goal_type: GoalType,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl NewGoal {
    pub fn new(goal_type: GoalType, target_value: f64) -> Self {
        Self {
            goal_type,
            target_value,
            current_value: 0.0,
            deadline: None,
        }
    }

    pub fn with_current_value(mut self, current_value: f64) -> Self {
        self.current_value = current_value;
        self
    }

    pub fn into_goal(self, id: i64) -> Goal {
        Goal {
            id,
            goal_type: self.goal_type,
            target_value: self.target_value,
            current_value: self.current_value,
            deadline: self.deadline,
            status: GoalStatus::Active,
        }
    }
}

/// Partial update; absent fields keep their stored value.
///
/// `deadline` distinguishes an absent field (`None`) from an explicit
/// `null` (`Some(None)`), which clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<Option<NaiveDate>>,
    pub status: Option<GoalStatus>,
}

impl GoalUpdate {
    pub fn apply(self, goal: &mut Goal) {
        if let Some(target_value) = self.target_value {
            goal.target_value = target_value;
        }
        if let Some(current_value) = self.current_value {
            goal.current_value = current_value;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
        if let Some(status) = self.status {
            goal.status = status;
        }
    }
}

fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

/// Targets must be positive and finite for progress ratios to mean anything
pub fn is_valid_target(target_value: f64) -> bool {
    target_value.is_finite() && target_value > 0.0
}
