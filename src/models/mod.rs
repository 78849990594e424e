//! Shared data models spanning the store, engine and HTTP layers.

pub mod analytics;
pub mod feedback;
pub mod goal;
pub mod record;

pub use analytics::{
    AnalyticsSummary, DailyScore, DashboardStats, GoalProgress, MovingAverages, PerformanceScores,
    WeekStats, WeeklyAverages,
};
pub use feedback::{
    Feedback, FeedbackScores, Insight, Priority, Recommendation, RecommendationTopic, Trend,
};
pub use goal::{Goal, GoalStatus, GoalType, GoalUpdate, NewGoal};
pub use record::{DailyRecord, RecordInput};
