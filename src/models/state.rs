// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Complete tracker state and its persisted envelope.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{DailyProgress, UserProfile};

/// Schema version written alongside the persisted state.
pub const STATE_VERSION: u32 = 1;

/// Everything the store owns.
///
/// Stored at: `{data_dir}/{storage_key}.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrackerState {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Ledger keyed by `YYYY-MM-DD`
    #[serde(default)]
    pub daily_progress: BTreeMap<String, DailyProgress>,
    #[serde(default)]
    pub active_challenges: Vec<String>,
    #[serde(default)]
    pub completed_challenges: Vec<String>,
    /// Start date (`YYYY-MM-DD`) of every challenge ever started
    #[serde(default)]
    pub challenge_start_dates: BTreeMap<String, String>,
}

impl TrackerState {
    /// Get-or-insert the ledger record for `date`.
    pub fn day_mut(&mut self, date: &str) -> &mut DailyProgress {
        self.daily_progress
            .entry(date.to_string())
            .or_insert_with(|| DailyProgress::empty(date))
    }

    pub fn is_active(&self, challenge_id: &str) -> bool {
        self.active_challenges.iter().any(|id| id == challenge_id)
    }

    pub fn is_completed(&self, challenge_id: &str) -> bool {
        self.completed_challenges.iter().any(|id| id == challenge_id)
    }

    /// Mark a challenge active.
    ///
    /// Returns `false` (and changes nothing) if it is already active or completed.
    pub fn start_challenge(&mut self, challenge_id: &str, started_on: &str) -> bool {
        if self.is_active(challenge_id) || self.is_completed(challenge_id) {
            return false;
        }
        self.active_challenges.push(challenge_id.to_string());
        self.challenge_start_dates
            .insert(challenge_id.to_string(), started_on.to_string());
        true
    }

    /// Move a challenge from active to completed.
    ///
    /// Returns whether the challenge was active beforehand. The id ends up in
    /// the completed set exactly once either way.
    pub fn complete_challenge(&mut self, challenge_id: &str) -> bool {
        let before = self.active_challenges.len();
        self.active_challenges.retain(|id| id != challenge_id);
        let was_active = self.active_challenges.len() != before;

        if !self.is_completed(challenge_id) {
            self.completed_challenges.push(challenge_id.to_string());
        }
        was_active
    }

    /// Highest numeric food entry id in the ledger.
    pub fn max_entry_id(&self) -> Option<i64> {
        self.daily_progress
            .values()
            .flat_map(|day| day.food_entries.iter())
            .filter_map(|entry| entry.id.parse::<i64>().ok())
            .max()
    }
}

/// On-disk envelope: `{"state": {...}, "version": 1}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub state: TrackerState,
    pub version: u32,
}

impl PersistedState {
    pub fn current(state: TrackerState) -> Self {
        Self {
            state,
            version: STATE_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_mut_creates_zeroed_record_once() {
        let mut state = TrackerState::default();
        state.day_mut("2024-01-15").water += 250.0;
        state.day_mut("2024-01-15").water += 250.0;

        assert_eq!(state.daily_progress.len(), 1);
        let day = &state.daily_progress["2024-01-15"];
        assert_eq!(day.date, "2024-01-15");
        assert_eq!(day.water, 500.0);
        assert_eq!(day.calories, 0.0);
    }

    #[test]
    fn test_start_challenge_is_idempotent() {
        let mut state = TrackerState::default();
        assert!(state.start_challenge("7-day-burn", "2024-01-15"));
        assert!(!state.start_challenge("7-day-burn", "2024-01-16"));

        assert_eq!(state.active_challenges, vec!["7-day-burn"]);
        assert_eq!(state.challenge_start_dates["7-day-burn"], "2024-01-15");
    }

    #[test]
    fn test_complete_moves_between_sets() {
        let mut state = TrackerState::default();
        state.start_challenge("7-day-burn", "2024-01-15");

        assert!(state.complete_challenge("7-day-burn"));
        assert!(!state.is_active("7-day-burn"));
        assert_eq!(state.completed_challenges, vec!["7-day-burn"]);

        // Completed challenges cannot be restarted
        assert!(!state.start_challenge("7-day-burn", "2024-01-20"));
        assert!(state.active_challenges.is_empty());
    }

    #[test]
    fn test_complete_without_start_is_recorded_once() {
        let mut state = TrackerState::default();
        assert!(!state.complete_challenge("15-day-muscle"));
        assert!(!state.complete_challenge("15-day-muscle"));
        assert_eq!(state.completed_challenges, vec!["15-day-muscle"]);
    }

    #[test]
    fn test_complete_removes_legacy_duplicates() {
        // Older data may hold the same id twice in the active list
        let mut state = TrackerState {
            active_challenges: vec!["a".into(), "b".into(), "a".into()],
            ..Default::default()
        };
        assert!(state.complete_challenge("a"));
        assert_eq!(state.active_challenges, vec!["b"]);
        assert_eq!(state.completed_challenges, vec!["a"]);
    }

    #[test]
    fn test_missing_key_deserializes_to_empty_state() {
        let persisted: PersistedState =
            serde_json::from_str(r#"{"state":{},"version":1}"#).unwrap();
        assert_eq!(persisted.state, TrackerState::default());
        assert!(persisted.state.profile.is_none());
    }
}
