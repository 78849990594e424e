//! Daily fitness record and its wire-level input form

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_MOOD: u8 = 3;
pub const MIN_MOOD: u8 = 1;
pub const MAX_MOOD: u8 = 5;

/// One day of tracked metrics. Unique per `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub steps: u32,
    /// Kilometres
    pub distance: f64,
    /// Calories burned
    pub calories: u32,
    pub calories_consumed: u32,
    /// Glasses of water
    pub water: u32,
    /// Hours slept
    pub sleep: f64,
    /// Active minutes
    pub active: u32,
    /// Kilograms
    pub weight: Option<f64>,
    pub mood: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl DailyRecord {
    /// Empty record for `date` with every metric at its default
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            steps: 0,
            distance: 0.0,
            calories: 0,
            calories_consumed: 0,
            water: 0,
            sleep: 0.0,
            active: 0,
            weight: None,
            mood: DEFAULT_MOOD,
            notes: None,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_calories(mut self, burned: u32, consumed: u32) -> Self {
        self.calories = burned;
        self.calories_consumed = consumed;
        self
    }

    pub fn with_water(mut self, water: u32) -> Self {
        self.water = water;
        self
    }

    pub fn with_sleep(mut self, sleep: f64) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn with_active(mut self, active: u32) -> Self {
        self.active = active;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_mood(mut self, mood: u8) -> Self {
        self.mood = mood;
        self
    }
}

/// Record as submitted by a client.
///
/// Numeric fields accept JSON numbers or numeric strings (HTML form values).
/// Anything unparseable is treated as absent and becomes the field default
/// once [`RecordInput::normalize`] runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordInput {
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub steps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories_consumed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub water: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sleep: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub active: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub mood: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RecordInput {
    /// Apply field defaults and coerce invalid values.
    ///
    /// Returns `None` only when the record has no date, since the date is the
    /// record key.
    pub fn normalize(self) -> Option<DailyRecord> {
        let date = self.date?;
        Some(DailyRecord {
            id: None,
            date,
            steps: count(self.steps),
            distance: amount(self.distance),
            calories: count(self.calories),
            calories_consumed: count(self.calories_consumed),
            water: count(self.water),
            sleep: amount(self.sleep),
            active: count(self.active),
            weight: self.weight.filter(|w| w.is_finite() && *w > 0.0),
            mood: mood(self.mood),
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        })
    }
}

fn count(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

fn mood(value: Option<f64>) -> u8 {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = v.round();
            if rounded >= MIN_MOOD as f64 && rounded <= MAX_MOOD as f64 {
                rounded as u8
            } else {
                DEFAULT_MOOD
            }
        }
        _ => DEFAULT_MOOD,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}
