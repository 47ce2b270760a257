// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily ledger behaviour of the progress store.

mod common;

use common::{make_entry, make_profile, set_time, test_store};
use fitgod_tracker::models::Goal;

#[test]
fn test_first_read_creates_zeroed_record() {
    let mut store = test_store();
    assert!(store.get_state().daily_progress.is_empty());

    let day = store.get_current_day_progress().unwrap();

    assert_eq!(day.date, "2024-01-15");
    assert_eq!(day.calories, 0.0);
    assert_eq!(day.protein, 0.0);
    assert_eq!(day.carbs, 0.0);
    assert_eq!(day.fats, 0.0);
    assert_eq!(day.water, 0.0);
    assert_eq!(day.steps, 0);
    assert_eq!(day.weight, None);
    assert!(day.food_entries.is_empty());
    assert_eq!(store.get_state().daily_progress.len(), 1);
}

#[test]
fn test_repeated_reads_are_equal() {
    let mut store = test_store();
    store.update_water(300.0).unwrap();

    let first = store.get_current_day_progress().unwrap();
    let second = store.get_current_day_progress().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_food_totals_equal_sum_of_entries() {
    let mut store = test_store();
    let entries = [
        make_entry("frango", 247.5, 46.5, 0.0, 5.4),
        make_entry("arroz-branco", 130.0, 2.7, 28.0, 0.3),
        make_entry("banana", 89.0, 1.1, 22.8, 0.3),
        make_entry("azeite", 88.4, 0.0, 0.0, 10.0),
    ];
    for entry in entries.iter().cloned() {
        store.add_food_entry(entry).unwrap();
    }

    let day = store.get_current_day_progress().unwrap();
    assert_eq!(day.food_entries.len(), entries.len());

    let calories: f64 = day.food_entries.iter().map(|e| e.calories).sum();
    let protein: f64 = day.food_entries.iter().map(|e| e.protein).sum();
    let carbs: f64 = day.food_entries.iter().map(|e| e.carbs).sum();
    let fats: f64 = day.food_entries.iter().map(|e| e.fats).sum();
    assert!((day.calories - calories).abs() < 1e-9);
    assert!((day.protein - protein).abs() < 1e-9);
    assert!((day.carbs - carbs).abs() < 1e-9);
    assert!((day.fats - fats).abs() < 1e-9);

    // Food never touches water or steps
    assert_eq!(day.water, 0.0);
    assert_eq!(day.steps, 0);
}

#[test]
fn test_entries_keep_order_and_get_unique_ids() {
    let mut store = test_store();
    store.add_food_entry(make_entry("a", 1.0, 0.0, 0.0, 0.0)).unwrap();
    store.add_food_entry(make_entry("b", 1.0, 0.0, 0.0, 0.0)).unwrap();
    store.add_food_entry(make_entry("c", 1.0, 0.0, 0.0, 0.0)).unwrap();

    let day = store.get_current_day_progress().unwrap();
    let ids: Vec<&str> = day.food_entries.iter().map(|e| e.id.as_str()).collect();
    let foods: Vec<&str> = day.food_entries.iter().map(|e| e.food_id.as_str()).collect();

    assert_eq!(foods, vec!["a", "b", "c"]);
    // The fixed clock never advances, so ids are bumped past each other
    let numeric: Vec<i64> = ids.iter().map(|id| id.parse().unwrap()).collect();
    assert!(numeric.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        day.food_entries[0].timestamp.to_rfc3339(),
        "2024-01-15T12:00:00+00:00"
    );
}

#[test]
fn test_steps_overwrite_but_water_accumulates() {
    let mut store = test_store();

    store.update_steps(4000).unwrap();
    store.update_steps(2500).unwrap();
    store.update_water(250.0).unwrap();
    store.update_water(500.0).unwrap();

    let day = store.get_current_day_progress().unwrap();
    assert_eq!(day.steps, 2500);
    assert_eq!(day.water, 750.0);
}

#[test]
fn test_negative_water_is_not_rejected() {
    let mut store = test_store();
    store.update_water(200.0).unwrap();
    store.update_water(-500.0).unwrap();

    assert_eq!(store.get_current_day_progress().unwrap().water, -300.0);
}

#[test]
fn test_weight_is_last_write_wins() {
    let mut store = test_store();
    store.update_weight(81.2).unwrap();
    store.update_weight(80.9).unwrap();

    assert_eq!(store.get_current_day_progress().unwrap().weight, Some(80.9));
}

#[test]
fn test_new_day_gets_a_new_record() {
    let mut store = test_store();
    store.update_water(1000.0).unwrap();
    store.update_weight(80.0).unwrap();

    // 22:30 local on the 15th is already the 16th in UTC; still the 15th here
    set_time(&mut store, "2024-01-15T22:30:00-03:00");
    store.update_water(500.0).unwrap();
    assert_eq!(store.get_state().daily_progress.len(), 1);

    set_time(&mut store, "2024-01-16T07:00:00-03:00");
    let day = store.get_current_day_progress().unwrap();
    assert_eq!(day.date, "2024-01-16");
    assert_eq!(day.water, 0.0);
    store.update_weight(79.6).unwrap();

    let state = store.get_state();
    assert_eq!(state.daily_progress.len(), 2);
    assert_eq!(state.daily_progress["2024-01-15"].water, 1500.0);

    let history: Vec<f64> = store.weight_history().into_iter().map(|(_, w)| w).collect();
    assert_eq!(history, vec![80.0, 79.6]);
}

#[test]
fn test_set_profile_replaces_wholesale() {
    let mut store = test_store();
    assert!(store.profile().is_none());

    store.set_profile(make_profile(Goal::Maintain)).unwrap();
    let mut replacement = make_profile(Goal::GainMuscle);
    replacement.name = "Bia".to_string();
    store.set_profile(replacement.clone()).unwrap();

    assert_eq!(store.profile(), Some(&replacement));
}

#[test]
fn test_progress_for_does_not_create_records() {
    let store = test_store();
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

    assert!(store.progress_for(date).is_none());
    assert!(store.get_state().daily_progress.is_empty());
}
