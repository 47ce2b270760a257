// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily progress ledger records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::catalog::Food;

/// Meal slot of a food entry, in the order meals happen during a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Read a number that JSON could not represent.
///
/// Non-finite values are written as `null`; they come back as NaN so a
/// blob holding one still loads.
pub(crate) fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];
}

/// A logged food, frozen at the moment it was added.
///
/// Name and macros are copied from the catalog, so later catalog edits
/// never change past entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodEntry {
    /// Creation time in epoch milliseconds, as a string
    pub id: String,
    pub food_id: String,
    pub food_name: String,
    /// Grams
    #[serde(deserialize_with = "nan_if_null")]
    pub quantity: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub calories: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub protein: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub carbs: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub fats: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub timestamp: DateTime<Utc>,
    pub meal: Meal,
}

/// Caller-supplied part of a food entry; the store stamps id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NewFoodEntry {
    pub food_id: String,
    pub food_name: String,
    pub quantity: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub meal: Meal,
}

impl NewFoodEntry {
    /// Scale a catalog food's per-100g values to `grams`.
    pub fn from_food(food: &Food, grams: f64, meal: Meal) -> Self {
        let multiplier = grams / 100.0;
        Self {
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            quantity: grams,
            calories: food.calories * multiplier,
            protein: food.protein * multiplier,
            carbs: food.carbs * multiplier,
            fats: food.fats * multiplier,
            meal,
        }
    }

    /// Attach identity and creation time.
    pub fn stamp(self, id: String, timestamp: DateTime<Utc>) -> FoodEntry {
        FoodEntry {
            id,
            food_id: self.food_id,
            food_name: self.food_name,
            quantity: self.quantity,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
            timestamp,
            meal: self.meal,
        }
    }
}

/// Totals for one calendar day.
///
/// Macro totals always equal the sum over `food_entries`; water and steps
/// only change through explicit updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyProgress {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(deserialize_with = "nan_if_null")]
    pub calories: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub protein: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub carbs: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub fats: f64,
    /// ml, accumulated
    #[serde(deserialize_with = "nan_if_null")]
    pub water: f64,
    /// last recorded count for the day
    pub steps: u32,
    /// kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub food_entries: Vec<FoodEntry>,
}

impl DailyProgress {
    /// Zeroed record for `date`.
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            water: 0.0,
            steps: 0,
            weight: None,
            food_entries: Vec::new(),
        }
    }

    /// Append an entry and fold its macros into the day totals.
    pub fn push_entry(&mut self, entry: FoodEntry) {
        self.calories += entry.calories;
        self.protein += entry.protein;
        self.carbs += entry.carbs;
        self.fats += entry.fats;
        self.food_entries.push(entry);
    }

    /// Entries for one meal slot, in the order they were logged.
    pub fn entries_for(&self, meal: Meal) -> impl Iterator<Item = &FoodEntry> {
        self.food_entries.iter().filter(move |e| e.meal == meal)
    }
}
