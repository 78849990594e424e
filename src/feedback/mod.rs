//! Feedback generation: overall score, recommendations and insights.

pub mod generator;
pub mod insights;
pub mod rules;

pub use generator::*;
pub use insights::*;
pub use rules::*;
