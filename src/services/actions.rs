// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validated entry points for the presentation layer.
//!
//! The store trusts every number it is given. These helpers do the
//! form-level checks first and leave the store untouched on rejection.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Meal, NewFoodEntry, ProfileForm, UserProfile};
use crate::services::catalog::{ChallengeCatalog, FoodCatalog, RecipeCatalog};
use crate::services::nutrition::profile_from_form;
use crate::services::store::ProgressStore;
use crate::time_utils::Clock;

/// Request to log a catalog food.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogFoodRequest {
    #[validate(length(min = 1))]
    pub food_id: String,
    /// Grams eaten
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    pub meal: Meal,
}

#[derive(Debug, Validate)]
struct AddWaterRequest {
    #[validate(range(exclusive_min = 0.0))]
    amount_ml: f64,
}

#[derive(Debug, Validate)]
struct RecordStepsRequest {
    #[validate(range(min = 1))]
    steps: u32,
}

#[derive(Debug, Validate)]
struct RecordWeightRequest {
    #[validate(range(exclusive_min = 0.0))]
    weight_kg: f64,
}

/// Range checks let NaN through; reject non-finite numbers explicitly.
fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new("finite"));
    Err(AppError::Validation(errors))
}

/// Validate the setup form, derive goals and store the new profile.
pub fn setup_profile<C: Clock>(
    store: &mut ProgressStore<C>,
    form: ProfileForm,
    config: &Config,
) -> Result<UserProfile> {
    form.validate()?;
    require_finite("weight", form.weight)?;
    require_finite("height", form.height)?;
    let profile = profile_from_form(form, config);
    store.set_profile(profile.clone())?;
    tracing::info!(
        calories = profile.daily_goals.calories,
        protein = profile.daily_goals.protein,
        "Profile set up"
    );
    Ok(profile)
}

/// Log `quantity` grams of a catalog food.
pub fn log_food<C: Clock>(
    store: &mut ProgressStore<C>,
    foods: &FoodCatalog,
    request: LogFoodRequest,
) -> Result<()> {
    request.validate()?;
    require_finite("quantity", request.quantity)?;
    let food = foods
        .lookup_by_id(&request.food_id)
        .ok_or_else(|| AppError::NotFound(format!("Food {} not found", request.food_id)))?;

    store.add_food_entry(NewFoodEntry::from_food(food, request.quantity, request.meal))
}

/// Log one serving of a catalog recipe as a single entry.
pub fn log_recipe<C: Clock>(
    store: &mut ProgressStore<C>,
    recipes: &RecipeCatalog,
    recipe_id: &str,
    meal: Meal,
) -> Result<()> {
    let recipe = recipes
        .lookup_by_id(recipe_id)
        .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", recipe_id)))?;

    store.add_food_entry(NewFoodEntry {
        food_id: recipe.id.clone(),
        food_name: recipe.name.clone(),
        quantity: 1.0,
        calories: recipe.calories,
        protein: recipe.protein,
        carbs: recipe.carbs.unwrap_or(0.0),
        fats: recipe.fats.unwrap_or(0.0),
        meal,
    })
}

pub fn add_water<C: Clock>(store: &mut ProgressStore<C>, amount_ml: f64) -> Result<()> {
    AddWaterRequest { amount_ml }.validate()?;
    require_finite("amount_ml", amount_ml)?;
    store.update_water(amount_ml)
}

pub fn record_steps<C: Clock>(store: &mut ProgressStore<C>, steps: u32) -> Result<()> {
    RecordStepsRequest { steps }.validate()?;
    store.update_steps(steps)
}

pub fn record_weight<C: Clock>(store: &mut ProgressStore<C>, weight_kg: f64) -> Result<()> {
    RecordWeightRequest { weight_kg }.validate()?;
    require_finite("weight_kg", weight_kg)?;
    store.update_weight(weight_kg)
}

/// Start a challenge that exists in the catalog.
pub fn start_challenge<C: Clock>(
    store: &mut ProgressStore<C>,
    challenges: &ChallengeCatalog,
    challenge_id: &str,
) -> Result<()> {
    if challenges.lookup_by_id(challenge_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Challenge {} not found",
            challenge_id
        )));
    }
    store.start_challenge(challenge_id)
}

/// Complete a challenge the user is currently doing.
pub fn complete_challenge<C: Clock>(
    store: &mut ProgressStore<C>,
    challenges: &ChallengeCatalog,
    challenge_id: &str,
) -> Result<()> {
    if challenges.lookup_by_id(challenge_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Challenge {} not found",
            challenge_id
        )));
    }
    if !store.active_challenges().iter().any(|id| id == challenge_id) {
        return Err(AppError::NotFound(format!(
            "Challenge {} is not active",
            challenge_id
        )));
    }
    store.complete_challenge(challenge_id)
}
