//! Guarded arithmetic used by the scoring engine.
//!
//! Every ratio here resolves a zero or non-finite denominator to 0 instead of
//! producing NaN or infinity.

/// Round to the nearest integer, halves rounding up
pub fn round(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value + 0.5).floor()
}

/// Round to `decimals` places, halves rounding up
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    round(value * factor) / factor
}

/// `numerator / denominator`, or 0 when the denominator is zero
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0.0;
    }
    numerator / denominator
}

/// Percentage of `target` reached by `value`, clamped to [0, 100]
pub fn capped_percentage(value: f64, target: f64) -> f64 {
    (safe_ratio(value, target) * 100.0).clamp(0.0, 100.0)
}

/// Arithmetic mean, dividing by `max(len, 1)`
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}

/// Round a percentage into an integer score in [0, 100]
pub fn to_score(value: f64) -> u32 {
    round(value).clamp(0.0, 100.0) as u32
}
