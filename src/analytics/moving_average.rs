//! Trailing simple moving average

use crate::common::math;

/// Trailing moving average with the same length as `series`.
///
/// Element `i` averages the `min(window, i + 1)` values ending at `i`, so the
/// first points use a partial window rather than zero padding. Values are
/// rounded to the nearest integer. A zero window behaves as a window of 1.
pub fn moving_average(series: &[f64], window: usize) -> Vec<i64> {
    let window = window.max(1);
    let mut sum = 0.0;
    let mut result = Vec::with_capacity(series.len());

    for (i, value) in series.iter().enumerate() {
        sum += sanitize(*value);
        if i >= window {
            sum -= sanitize(series[i - window]);
        }
        let count = (i + 1).min(window);
        result.push(math::round(sum / count as f64) as i64);
    }

    result
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
