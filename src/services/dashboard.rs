// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only summaries for the dashboard and challenge views.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Challenge, DailyProgress, FoodEntry, Meal, UserProfile};
use crate::services::catalog::ChallengeCatalog;
use crate::services::store::ProgressStore;
use crate::time_utils::Clock;

/// Number of recent entries shown on the dashboard.
const RECENT_ENTRIES: usize = 3;

/// Progress toward one daily goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalProgress {
    pub consumed: f64,
    pub goal: f64,
    /// Uncapped; 0 when the goal is not positive
    pub percent: f64,
    /// Capped at 100 for progress bars
    pub bar_percent: f64,
    /// Never negative
    pub remaining: f64,
    pub reached: bool,
}

impl GoalProgress {
    pub fn new(consumed: f64, goal: f64) -> Self {
        let percent = if goal > 0.0 {
            consumed / goal * 100.0
        } else {
            0.0
        };
        Self {
            consumed,
            goal,
            percent,
            bar_percent: percent.clamp(0.0, 100.0),
            remaining: (goal - consumed).max(0.0),
            reached: goal > 0.0 && consumed >= goal,
        }
    }
}

/// Entries logged for one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealGroup {
    pub meal: Meal,
    pub calories: f64,
    pub entries: Vec<FoodEntry>,
}

/// Everything the dashboard shows for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailySummary {
    pub date: String,
    pub calories: GoalProgress,
    pub protein: GoalProgress,
    pub water: GoalProgress,
    pub steps: GoalProgress,
    pub carbs: f64,
    pub fats: f64,
    pub weight: Option<f64>,
    /// Most recent entries, oldest first
    pub recent_entries: Vec<FoodEntry>,
    /// Non-empty meals, breakfast to snack
    pub meals: Vec<MealGroup>,
}

impl DailySummary {
    pub fn build(profile: &UserProfile, progress: &DailyProgress) -> Self {
        let goals = &profile.daily_goals;
        let skip = progress.food_entries.len().saturating_sub(RECENT_ENTRIES);

        Self {
            date: progress.date.clone(),
            calories: GoalProgress::new(progress.calories, goals.calories as f64),
            protein: GoalProgress::new(progress.protein, goals.protein as f64),
            water: GoalProgress::new(progress.water, f64::from(goals.water)),
            steps: GoalProgress::new(f64::from(progress.steps), f64::from(goals.steps)),
            carbs: progress.carbs,
            fats: progress.fats,
            weight: progress.weight,
            recent_entries: progress.food_entries[skip..].to_vec(),
            meals: group_by_meal(progress),
        }
    }
}

/// Group a day's entries by meal slot, skipping empty slots.
pub fn group_by_meal(progress: &DailyProgress) -> Vec<MealGroup> {
    Meal::ALL
        .iter()
        .filter_map(|&meal| {
            let entries: Vec<FoodEntry> = progress.entries_for(meal).cloned().collect();
            if entries.is_empty() {
                return None;
            }
            Some(MealGroup {
                meal,
                calories: entries.iter().map(|e| e.calories).sum(),
                entries,
            })
        })
        .collect()
}

/// How far into an active challenge the user is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengeProgress {
    pub challenge_id: String,
    /// 1 on the start date, capped at `duration`
    pub day: u32,
    pub duration: u32,
    pub percent: f64,
}

impl ChallengeProgress {
    pub fn new(challenge: &Challenge, started_on: NaiveDate, today: NaiveDate) -> Self {
        let elapsed = (today - started_on).num_days().max(0) + 1;
        let day = u32::try_from(elapsed)
            .unwrap_or(u32::MAX)
            .min(challenge.duration);
        let percent = if challenge.duration > 0 {
            f64::from(day) / f64::from(challenge.duration) * 100.0
        } else {
            100.0
        };
        Self {
            challenge_id: challenge.id.clone(),
            day,
            duration: challenge.duration,
            percent,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.day >= self.duration
    }
}

/// Progress of every active challenge known to the catalog.
///
/// Challenges without a recorded start date count from today.
pub fn active_challenge_progress<C: Clock>(
    store: &ProgressStore<C>,
    catalog: &ChallengeCatalog,
) -> Vec<ChallengeProgress> {
    let today = store.today();
    store
        .active_challenges()
        .iter()
        .filter_map(|id| {
            let challenge = catalog.lookup_by_id(id)?;
            let started_on = store.challenge_started_on(id).unwrap_or(today);
            Some(ChallengeProgress::new(challenge, started_on, today))
        })
        .collect()
}
