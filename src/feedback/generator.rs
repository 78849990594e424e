//! Feedback report assembly

use tracing::debug;

use super::insights::insights;
use super::rules::recommendations;
use crate::analytics::scoring::performance_scores;
use crate::common::math;
use crate::models::feedback::{Feedback, FeedbackScores};
use crate::models::record::DailyRecord;

/// Build the feedback report for a record history.
///
/// An empty history is not an error: every score is 0, every recommendation
/// fires and no insight is produced.
pub fn generate_feedback(records: &[DailyRecord]) -> Feedback {
    let scores = performance_scores(records);
    let all: Vec<f64> = scores.as_array().iter().map(|&s| s as f64).collect();
    let overall_score = math::to_score(math::mean(&all));

    let feedback = Feedback {
        overall_score,
        scores: FeedbackScores {
            activity: math::to_score(math::mean(&[
                scores.steps as f64,
                scores.exercise as f64,
            ])),
            sleep: scores.sleep,
            consistency: scores.consistency,
        },
        recommendations: recommendations(&scores),
        insights: insights(records),
    };

    debug!(
        records = records.len(),
        overall_score,
        recommendations = feedback.recommendations.len(),
        "Generated feedback"
    );

    feedback
}
