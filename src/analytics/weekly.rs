//! Trailing-week aggregates

use super::series::{trailing, Metric, WEEK_SPAN};
use crate::common::math;
use crate::models::record::DailyRecord;

/// Mean of `metric` over the last `span` records.
///
/// Integer metrics round to a whole number, fractional ones (sleep, distance,
/// weight) to one decimal. An empty history averages to 0.
pub fn weekly_average(records: &[DailyRecord], metric: Metric, span: usize) -> f64 {
    let values: Vec<f64> = trailing(records, span)
        .into_iter()
        .map(|r| metric.value(r))
        .collect();
    let average = math::mean(&values);

    if metric.is_fractional() {
        math::round_to(average, 1)
    } else {
        math::round(average)
    }
}

/// [`weekly_average`] over the default seven-record span
pub fn weekly_average_default(records: &[DailyRecord], metric: Metric) -> f64 {
    weekly_average(records, metric, WEEK_SPAN)
}
