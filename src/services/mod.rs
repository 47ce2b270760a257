// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod actions;
pub mod catalog;
pub mod dashboard;
pub mod nutrition;
pub mod store;

pub use catalog::{CatalogError, Catalogs, ChallengeCatalog, FoodCatalog, RecipeCatalog};
pub use dashboard::{ChallengeProgress, DailySummary, GoalProgress};
pub use nutrition::{calculate_calorie_needs, calculate_protein_needs};
pub use store::{Action, ProgressStore, SubscriptionId};
