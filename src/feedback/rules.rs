//! Score-threshold recommendation rules

use crate::models::analytics::PerformanceScores;
use crate::models::feedback::{Priority, Recommendation, RecommendationTopic};

/// One dimension of [`PerformanceScores`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDimension {
    Steps,
    Exercise,
    Sleep,
    Hydration,
    Consistency,
    Balance,
}

impl ScoreDimension {
    pub fn of(&self, scores: &PerformanceScores) -> u32 {
        match self {
            ScoreDimension::Steps => scores.steps,
            ScoreDimension::Exercise => scores.exercise,
            ScoreDimension::Sleep => scores.sleep,
            ScoreDimension::Hydration => scores.hydration,
            ScoreDimension::Consistency => scores.consistency,
            ScoreDimension::Balance => scores.balance,
        }
    }
}

/// Fires when `dimension` scores strictly below `below`
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    pub dimension: ScoreDimension,
    pub below: u32,
    pub priority: Priority,
    pub topic: RecommendationTopic,
    pub title: &'static str,
    pub message: &'static str,
}

impl RecommendationRule {
    pub fn matches(&self, scores: &PerformanceScores) -> bool {
        self.dimension.of(scores) < self.below
    }

    fn to_recommendation(self) -> Recommendation {
        Recommendation {
            priority: self.priority,
            topic: self.topic,
            title: self.title.to_string(),
            message: self.message.to_string(),
        }
    }
}

pub const RULES: [RecommendationRule; 4] = [
    RecommendationRule {
        dimension: ScoreDimension::Steps,
        below: 70,
        priority: Priority::High,
        topic: RecommendationTopic::IncreaseSteps,
        title: "Increase Daily Steps",
        message: "You are averaging under 70% of the 10,000 step target. Add a short walk after meals or take the stairs.",
    },
    RecommendationRule {
        dimension: ScoreDimension::Sleep,
        below: 70,
        priority: Priority::High,
        topic: RecommendationTopic::ImproveSleep,
        title: "Improve Sleep",
        message: "Your sleep is well below 8 hours a night. Keep a consistent bedtime and limit screens before bed.",
    },
    RecommendationRule {
        dimension: ScoreDimension::Exercise,
        below: 60,
        priority: Priority::Medium,
        topic: RecommendationTopic::AddExercise,
        title: "Add More Exercise",
        message: "Aim for at least 30 active minutes a day. Short sessions of brisk activity add up.",
    },
    RecommendationRule {
        dimension: ScoreDimension::Hydration,
        below: 80,
        priority: Priority::Medium,
        topic: RecommendationTopic::Hydration,
        title: "Stay Hydrated",
        message: "You are drinking fewer than 8 glasses of water a day. Keep a bottle within reach.",
    },
];

/// Every matching rule, in table order. Rules are independent.
pub fn recommendations(scores: &PerformanceScores) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| rule.matches(scores))
        .map(|rule| rule.to_recommendation())
        .collect()
}
