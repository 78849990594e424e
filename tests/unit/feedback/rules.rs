//! Unit tests for recommendation rules

use fitdash::feedback::recommendations;
use fitdash::models::analytics::PerformanceScores;
use fitdash::models::feedback::{Priority, RecommendationTopic};

fn scores(steps: u32, exercise: u32, sleep: u32, hydration: u32) -> PerformanceScores {
    PerformanceScores {
        steps,
        exercise,
        sleep,
        hydration,
        consistency: 100,
        balance: 100,
    }
}

fn topics(scores: &PerformanceScores) -> Vec<RecommendationTopic> {
    recommendations(scores).iter().map(|r| r.topic).collect()
}

#[test]
fn test_no_recommendations_when_on_target() {
    assert!(recommendations(&scores(100, 100, 100, 100)).is_empty());
}

#[test]
fn test_rules_fire_independently() {
    assert_eq!(
        topics(&scores(60, 50, 90, 90)),
        vec![RecommendationTopic::IncreaseSteps, RecommendationTopic::AddExercise]
    );
    assert_eq!(
        topics(&scores(90, 90, 10, 10)),
        vec![RecommendationTopic::ImproveSleep, RecommendationTopic::Hydration]
    );
}

#[test]
fn test_thresholds_are_strict() {
    assert!(recommendations(&scores(70, 60, 70, 80)).is_empty());
    assert_eq!(topics(&scores(69, 59, 69, 79)).len(), 4);
}

#[test]
fn test_priorities() {
    let all = recommendations(&scores(0, 0, 0, 0));
    let priorities: Vec<Priority> = all.iter().map(|r| r.priority).collect();
    assert_eq!(
        priorities,
        vec![Priority::High, Priority::High, Priority::Medium, Priority::Medium]
    );
    assert!(all.iter().all(|r| !r.title.is_empty() && !r.message.is_empty()));
}
