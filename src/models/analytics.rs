//! Engine outputs consumed by the presentation layer

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::record::DailyRecord;

/// Six-dimension performance scores, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub steps: u32,
    pub exercise: u32,
    pub sleep: u32,
    pub hydration: u32,
    pub consistency: u32,
    pub balance: u32,
}

impl PerformanceScores {
    /// Fixed order: steps, exercise, sleep, hydration, consistency, balance
    pub fn as_array(&self) -> [u32; 6] {
        [
            self.steps,
            self.exercise,
            self.sleep,
            self.hydration,
            self.consistency,
            self.balance,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyScore {
    pub date: NaiveDate,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub window: usize,
    pub steps: Vec<i64>,
    pub calories: Vec<i64>,
    pub water: Vec<i64>,
    pub active: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverages {
    pub steps: f64,
    pub calories: f64,
    pub water: f64,
    pub sleep: f64,
    pub active: f64,
}

/// Chart-ready series, all aligned on `dates` (ascending)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub dates: Vec<NaiveDate>,
    pub daily_scores: Vec<DailyScore>,
    pub moving_averages: MovingAverages,
    pub weekly_averages: WeeklyAverages,
    pub performance_scores: [u32; 6],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStats {
    pub total_steps: u64,
    pub avg_steps: u64,
    pub streak: usize,
    pub days_logged: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// `{}` on the wire when nothing was logged for the day
    #[serde(
        serialize_with = "record_or_empty",
        deserialize_with = "empty_or_record"
    )]
    pub today: Option<DailyRecord>,
    /// Newest first
    pub week_data: Vec<DailyRecord>,
    pub stats: WeekStats,
}

fn record_or_empty<S>(record: &Option<DailyRecord>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match record {
        Some(record) => record.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

fn empty_or_record<'de, D>(deserializer: D) -> Result<Option<DailyRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        value => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub percentage: f64,
    pub is_completed: bool,
}
