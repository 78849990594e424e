//! Record ordering and metric selection

use crate::models::record::DailyRecord;

/// Default trailing window, in records
pub const WEEK_SPAN: usize = 7;

/// Records sorted by date, oldest first
pub fn chronological(records: &[DailyRecord]) -> Vec<&DailyRecord> {
    let mut sorted: Vec<&DailyRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);
    sorted
}

/// The last `span` records in chronological order (fewer if unavailable)
pub fn trailing(records: &[DailyRecord], span: usize) -> Vec<&DailyRecord> {
    let sorted = chronological(records);
    let start = sorted.len().saturating_sub(span);
    sorted[start..].to_vec()
}

/// A numeric field of [`DailyRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Steps,
    Distance,
    Calories,
    CaloriesConsumed,
    Water,
    Sleep,
    Active,
    Weight,
    Mood,
}

impl Metric {
    /// Value for `record`; a missing weight reads as 0
    pub fn value(&self, record: &DailyRecord) -> f64 {
        match self {
            Metric::Steps => record.steps as f64,
            Metric::Distance => record.distance,
            Metric::Calories => record.calories as f64,
            Metric::CaloriesConsumed => record.calories_consumed as f64,
            Metric::Water => record.water as f64,
            Metric::Sleep => record.sleep,
            Metric::Active => record.active as f64,
            Metric::Weight => record.weight.unwrap_or(0.0),
            Metric::Mood => record.mood as f64,
        }
    }

    /// Metrics measured in fractional units are reported to one decimal
    pub fn is_fractional(&self) -> bool {
        matches!(self, Metric::Distance | Metric::Sleep | Metric::Weight)
    }
}

/// Values of `metric` in chronological order
pub fn metric_series(records: &[DailyRecord], metric: Metric) -> Vec<f64> {
    chronological(records)
        .into_iter()
        .map(|r| metric.value(r))
        .collect()
}
