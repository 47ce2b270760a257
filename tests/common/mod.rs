// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::DateTime;
use fitgod_tracker::db::LocalStorage;
use fitgod_tracker::models::{
    ActivityLevel, DailyGoals, Gender, Goal, Meal, NewFoodEntry, UserProfile,
};
use fitgod_tracker::services::ProgressStore;
use fitgod_tracker::time_utils::FixedClock;

/// Storage key used by every test store.
#[allow(dead_code)]
pub const STORAGE_KEY: &str = "fitgod-storage";

/// Clock pinned to a Sao Paulo morning.
#[allow(dead_code)]
pub fn test_clock() -> FixedClock {
    FixedClock::parse("2024-01-15T09:00:00-03:00").expect("valid timestamp")
}

/// Store on in-memory storage with a fixed clock.
#[allow(dead_code)]
pub fn test_store() -> ProgressStore<FixedClock> {
    ProgressStore::open_with_clock(LocalStorage::in_memory(), STORAGE_KEY, test_clock())
        .expect("Failed to open in-memory store")
}

/// Move the store's clock to a new RFC3339 instant.
#[allow(dead_code)]
pub fn set_time(store: &mut ProgressStore<FixedClock>, rfc3339: &str) {
    let at = DateTime::parse_from_rfc3339(rfc3339).expect("valid timestamp");
    store.clock_mut().set(at);
}

/// 30-year-old male, 80kg, 180cm, moderately active.
#[allow(dead_code)]
pub fn make_profile(goal: Goal) -> UserProfile {
    UserProfile {
        name: "Carlos".to_string(),
        age: 30,
        weight: 80.0,
        height: 180.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal,
        daily_goals: DailyGoals {
            calories: 2759,
            protein: 96,
            water: 3000,
            steps: 10000,
        },
    }
}

#[allow(dead_code)]
pub fn make_entry(food_id: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> NewFoodEntry {
    NewFoodEntry {
        food_id: food_id.to_string(),
        food_name: food_id.to_uppercase(),
        quantity: 100.0,
        calories,
        protein,
        carbs,
        fats,
        meal: Meal::Lunch,
    }
}
