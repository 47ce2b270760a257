// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Metabolic needs calculator.
//!
//! BMR uses the Mifflin-St Jeor equation:
//! `10 * weight_kg + 6.25 * height_cm - 5 * age + s`, with `s = +5` for men
//! and `s = -161` for women. TDEE scales BMR by a fixed activity multiplier.

use crate::config::Config;
use crate::models::{ActivityLevel, DailyGoals, Gender, Goal, ProfileForm, UserProfile};

/// Daily deficit applied for weight loss (kcal).
const LOSE_WEIGHT_DEFICIT: f64 = 500.0;
/// Daily surplus applied for muscle gain (kcal).
const GAIN_MUSCLE_SURPLUS: f64 = 300.0;

/// Basal metabolic rate in kcal/day.
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Total daily energy expenditure in kcal/day (unrounded).
pub fn calculate_tdee(profile: &UserProfile) -> f64 {
    calculate_bmr(profile) * activity_multiplier(profile.activity_level)
}

/// Daily calorie target for the profile's goal, rounded to whole kcal.
pub fn calculate_calorie_needs(profile: &UserProfile) -> i64 {
    let tdee = calculate_tdee(profile);
    let target = match profile.goal {
        Goal::LoseWeight => tdee - LOSE_WEIGHT_DEFICIT,
        Goal::GainMuscle => tdee + GAIN_MUSCLE_SURPLUS,
        Goal::Maintain => tdee,
    };
    round_half_up(target)
}

/// Grams of protein per kg of body weight for a goal.
pub fn protein_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::GainMuscle => 2.0,
        Goal::LoseWeight => 1.6,
        Goal::Maintain => 1.2,
    }
}

/// Daily protein target in whole grams.
pub fn calculate_protein_needs(profile: &UserProfile) -> i64 {
    round_half_up(profile.weight * protein_multiplier(profile.goal))
}

/// Build a profile from a setup form, deriving its daily goals.
///
/// The form is assumed to be validated already.
pub fn profile_from_form(form: ProfileForm, config: &Config) -> UserProfile {
    let mut profile = UserProfile {
        name: form.name,
        age: form.age,
        weight: form.weight,
        height: form.height,
        gender: form.gender,
        activity_level: form.activity_level,
        goal: form.goal,
        daily_goals: DailyGoals {
            calories: 0,
            protein: 0,
            water: config.default_water_goal_ml,
            steps: config.default_steps_goal,
        },
    };
    profile.daily_goals.calories = calculate_calorie_needs(&profile);
    profile.daily_goals.protein = calculate_protein_needs(&profile);
    profile
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    // `value + 0.5` can round up before flooring; the fraction is exact
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}
