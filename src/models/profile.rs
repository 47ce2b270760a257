// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Biological sex used by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Gender {
    Male,
    Female,
}

/// Activity tiers, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Body composition goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainMuscle,
}

/// Daily targets derived at profile setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyGoals {
    /// kcal
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories: i64,
    /// grams
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub protein: i64,
    /// ml
    pub water: u32,
    pub steps: u32,
}

/// The single user profile of an installation.
///
/// Replaced wholesale on every setup submission, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserProfile {
    pub name: String,
    /// Years
    pub age: u32,
    /// Kilograms
    #[serde(deserialize_with = "crate::models::progress::nan_if_null")]
    pub weight: f64,
    /// Centimeters
    #[serde(deserialize_with = "crate::models::progress::nan_if_null")]
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub daily_goals: DailyGoals,
}

/// Profile setup form as submitted by the presentation layer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 1, max = 120))]
    pub age: u32,
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}
