// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod catalog;
pub mod profile;
pub mod progress;
pub mod state;

pub use catalog::{Challenge, Food, FoodCategory, Recipe, RecipeCategory};
pub use profile::{ActivityLevel, DailyGoals, Gender, Goal, ProfileForm, UserProfile};
pub use progress::{DailyProgress, FoodEntry, Meal, NewFoodEntry};
pub use state::{PersistedState, TrackerState, STATE_VERSION};
