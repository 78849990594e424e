//! Unit tests for record normalization

use fitdash::models::record::{DailyRecord, RecordInput, DEFAULT_MOOD};
use serde_json::json;

fn input(value: serde_json::Value) -> RecordInput {
    serde_json::from_value(value).expect("valid record input")
}

#[test]
fn test_record_without_date_is_rejected() {
    assert!(input(json!({ "steps": 1000 })).normalize().is_none());
}

#[test]
fn test_negative_and_garbage_values_become_zero() {
    let record = input(json!({
        "date": "2024-03-01",
        "steps": -40,
        "calories": true,
        "active": null,
        "distance": "3.2km",
    }))
    .normalize()
    .unwrap();

    assert_eq!(record.steps, 0);
    assert_eq!(record.calories, 0);
    assert_eq!(record.active, 0);
    assert_eq!(record.distance, 0.0);
}

#[test]
fn test_mood_outside_scale_defaults() {
    let high = input(json!({ "date": "2024-03-01", "mood": 9 })).normalize().unwrap();
    let zero = input(json!({ "date": "2024-03-01", "mood": 0 })).normalize().unwrap();
    let valid = input(json!({ "date": "2024-03-01", "mood": "4" })).normalize().unwrap();

    assert_eq!(high.mood, DEFAULT_MOOD);
    assert_eq!(zero.mood, DEFAULT_MOOD);
    assert_eq!(valid.mood, 4);
}

#[test]
fn test_weight_is_optional() {
    let missing = input(json!({ "date": "2024-03-01" })).normalize().unwrap();
    let zero = input(json!({ "date": "2024-03-01", "weight": 0 })).normalize().unwrap();
    let set = input(json!({ "date": "2024-03-01", "weight": 72.4 })).normalize().unwrap();

    assert_eq!(missing.weight, None);
    assert_eq!(zero.weight, None);
    assert_eq!(set.weight, Some(72.4));
}

#[test]
fn test_fractional_counts_are_rounded() {
    let record = input(json!({ "date": "2024-03-01", "water": 7.6, "sleep": 7.25 }))
        .normalize()
        .unwrap();
    assert_eq!(record.water, 8);
    assert_eq!(record.sleep, 7.25);
}

#[test]
fn test_blank_notes_are_dropped() {
    let blank = input(json!({ "date": "2024-03-01", "notes": "   " })).normalize().unwrap();
    let kept = input(json!({ "date": "2024-03-01", "notes": " leg day " })).normalize().unwrap();
    assert_eq!(blank.notes, None);
    assert_eq!(kept.notes.as_deref(), Some("leg day"));
}

#[test]
fn test_serialized_record_omits_missing_id() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let value = serde_json::to_value(DailyRecord::new(date).with_steps(1200)).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["date"], "2024-03-01");
    assert_eq!(value["steps"], 1200);
    assert_eq!(value["mood"], 3);
}
