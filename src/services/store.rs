// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily progress store.
//!
//! Owns the profile, the per-day ledger and challenge membership. Every
//! mutation goes through [`ProgressStore::dispatch`]:
//! 1. Apply the action to a copy-on-write state snapshot
//! 2. Persist the new snapshot to local storage
//! 3. Notify subscribers
//!
//! Snapshots handed out by [`ProgressStore::get_state`] never change; callers
//! re-query after a mutation.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::db::LocalStorage;
use crate::error::{AppError, Result};
use crate::models::{
    DailyProgress, NewFoodEntry, PersistedState, TrackerState, UserProfile, STATE_VERSION,
};
use crate::time_utils::{date_key, parse_date_key, Clock, SystemClock};

/// Handle returned by [`ProgressStore::subscribe`].
pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(&TrackerState)>;

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetProfile(UserProfile),
    /// Materialize today's ledger record if it does not exist yet
    EnsureDay,
    AddFoodEntry(NewFoodEntry),
    /// Add ml to today's water total
    UpdateWater(f64),
    /// Replace today's step count
    UpdateSteps(u32),
    /// Replace today's recorded weight (kg)
    UpdateWeight(f64),
    StartChallenge(String),
    CompleteChallenge(String),
}

/// Borrowed form of [`PersistedState`] so saving never clones the ledger.
#[derive(Serialize)]
struct PersistedStateRef<'a> {
    state: &'a TrackerState,
    version: u32,
}

/// Single-writer state container for one installation.
pub struct ProgressStore<C: Clock = SystemClock> {
    state: Arc<TrackerState>,
    storage: LocalStorage,
    storage_key: String,
    clock: C,
    /// Last food entry id handed out (epoch millis)
    last_entry_id: i64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl ProgressStore<SystemClock> {
    /// Open the store on the wall clock.
    pub fn open(storage: LocalStorage, storage_key: &str) -> Result<Self> {
        Self::open_with_clock(storage, storage_key, SystemClock)
    }
}

impl<C: Clock> ProgressStore<C> {
    /// Open the store, loading persisted state if present.
    ///
    /// A missing entry means first run and yields the empty state.
    pub fn open_with_clock(storage: LocalStorage, storage_key: &str, clock: C) -> Result<Self> {
        let state = match storage.get::<PersistedState>(storage_key)? {
            Some(persisted) if persisted.version > STATE_VERSION => {
                return Err(AppError::UnsupportedVersion {
                    found: persisted.version,
                    supported: STATE_VERSION,
                });
            }
            Some(persisted) => {
                tracing::info!(
                    key = storage_key,
                    version = persisted.version,
                    days = persisted.state.daily_progress.len(),
                    has_profile = persisted.state.profile.is_some(),
                    "Loaded persisted state"
                );
                persisted.state
            }
            None => {
                tracing::info!(key = storage_key, "No persisted state, starting fresh");
                TrackerState::default()
            }
        };

        let last_entry_id = state.max_entry_id().unwrap_or(0);

        Ok(Self {
            state: Arc::new(state),
            storage,
            storage_key: storage_key.to_string(),
            clock,
            last_entry_id,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    // ─── State Container ─────────────────────────────────────────

    /// Current immutable snapshot.
    pub fn get_state(&self) -> Arc<TrackerState> {
        Arc::clone(&self.state)
    }

    /// Register a listener called with the new state after every transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&TrackerState) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Apply an action, persist the result and notify subscribers.
    ///
    /// The in-memory transition is kept even if persisting fails.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let today = date_key(self.clock.today());
        let now = self.clock.now();
        self.apply(action, &today, now)
    }

    fn apply(&mut self, action: Action, today: &str, now: DateTime<Utc>) -> Result<()> {
        if matches!(action, Action::EnsureDay) && self.state.daily_progress.contains_key(today) {
            return Ok(());
        }

        let state = Arc::make_mut(&mut self.state);
        let changed = reduce(state, action, today, now, &mut self.last_entry_id);
        if !changed {
            return Ok(());
        }

        self.persist()?;
        for (_, listener) in &self.listeners {
            listener(self.state.as_ref());
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        let envelope = PersistedStateRef {
            state: self.state.as_ref(),
            version: STATE_VERSION,
        };
        self.storage.put(&self.storage_key, &envelope).map_err(|e| {
            tracing::error!(error = %e, code = e.code(), "Failed to persist state");
            e
        })
    }

    /// Serialize the full state in its persisted envelope.
    pub fn export_json(&self) -> Result<String> {
        let envelope = PersistedStateRef {
            state: self.state.as_ref(),
            version: STATE_VERSION,
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    // ─── Profile ─────────────────────────────────────────────────

    /// Replace the profile wholesale.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.dispatch(Action::SetProfile(profile))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.state.profile.as_ref()
    }

    // ─── Daily Progress ──────────────────────────────────────────

    /// Today's local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Today's record, created zeroed on first access.
    ///
    /// Returns a copy; re-query after mutating.
    pub fn get_current_day_progress(&mut self) -> Result<DailyProgress> {
        let today = date_key(self.clock.today());
        let now = self.clock.now();
        self.apply(Action::EnsureDay, &today, now)?;
        Ok(self
            .state
            .daily_progress
            .get(&today)
            .cloned()
            .unwrap_or_else(|| DailyProgress::empty(today)))
    }

    /// Record for `date` without creating one.
    pub fn progress_for(&self, date: NaiveDate) -> Option<&DailyProgress> {
        self.state.daily_progress.get(&date_key(date))
    }

    /// Append a food entry to today's record and add its macros.
    pub fn add_food_entry(&mut self, entry: NewFoodEntry) -> Result<()> {
        self.dispatch(Action::AddFoodEntry(entry))
    }

    /// Add `amount_ml` to today's water total.
    pub fn update_water(&mut self, amount_ml: f64) -> Result<()> {
        self.dispatch(Action::UpdateWater(amount_ml))
    }

    /// Overwrite today's step count.
    pub fn update_steps(&mut self, steps: u32) -> Result<()> {
        self.dispatch(Action::UpdateSteps(steps))
    }

    /// Overwrite today's weight.
    pub fn update_weight(&mut self, weight_kg: f64) -> Result<()> {
        self.dispatch(Action::UpdateWeight(weight_kg))
    }

    /// Every recorded weight, oldest first.
    pub fn weight_history(&self) -> Vec<(NaiveDate, f64)> {
        self.state
            .daily_progress
            .values()
            .filter_map(|day| Some((parse_date_key(&day.date)?, day.weight?)))
            .collect()
    }

    // ─── Challenges ──────────────────────────────────────────────

    pub fn start_challenge(&mut self, challenge_id: &str) -> Result<()> {
        self.dispatch(Action::StartChallenge(challenge_id.to_string()))
    }

    pub fn complete_challenge(&mut self, challenge_id: &str) -> Result<()> {
        self.dispatch(Action::CompleteChallenge(challenge_id.to_string()))
    }

    pub fn active_challenges(&self) -> &[String] {
        &self.state.active_challenges
    }

    pub fn completed_challenges(&self) -> &[String] {
        &self.state.completed_challenges
    }

    /// Date a challenge was started, if it ever was.
    pub fn challenge_started_on(&self, challenge_id: &str) -> Option<NaiveDate> {
        self.state
            .challenge_start_dates
            .get(challenge_id)
            .and_then(|d| parse_date_key(d))
    }

    /// Mutable access to the clock (tests move time forward).
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

/// Apply `action` to `state`. Returns whether anything changed.
fn reduce(
    state: &mut TrackerState,
    action: Action,
    today: &str,
    now: DateTime<Utc>,
    last_entry_id: &mut i64,
) -> bool {
    match action {
        Action::SetProfile(profile) => {
            tracing::debug!(
                calories = profile.daily_goals.calories,
                protein = profile.daily_goals.protein,
                "Profile replaced"
            );
            state.profile = Some(profile);
            true
        }
        Action::EnsureDay => {
            tracing::debug!(date = today, "Created daily record");
            state.day_mut(today);
            true
        }
        Action::AddFoodEntry(entry) => {
            let id = next_entry_id(last_entry_id, now);
            let day = state.day_mut(today);
            day.push_entry(entry.stamp(id.to_string(), now));
            tracing::debug!(
                date = today,
                entry_id = id,
                calories = day.calories,
                protein = day.protein,
                "Food entry added"
            );
            true
        }
        Action::UpdateWater(amount) => {
            let day = state.day_mut(today);
            day.water += amount;
            tracing::debug!(date = today, added = amount, water = day.water, "Water updated");
            true
        }
        Action::UpdateSteps(steps) => {
            state.day_mut(today).steps = steps;
            tracing::debug!(date = today, steps, "Steps updated");
            true
        }
        Action::UpdateWeight(weight) => {
            state.day_mut(today).weight = Some(weight);
            tracing::debug!(date = today, weight, "Weight updated");
            true
        }
        Action::StartChallenge(id) => {
            let started = state.start_challenge(&id, today);
            if started {
                tracing::debug!(challenge_id = %id, "Challenge started");
            } else {
                tracing::debug!(challenge_id = %id, "Challenge already active or completed");
            }
            started
        }
        Action::CompleteChallenge(id) => {
            let was_completed = state.is_completed(&id);
            let was_active = state.complete_challenge(&id);
            if !was_active {
                tracing::warn!(challenge_id = %id, "Completed a challenge that was not active");
            } else {
                tracing::debug!(challenge_id = %id, "Challenge completed");
            }
            was_active || !was_completed
        }
    }
}

/// Time-derived id, bumped past the previous one on collisions.
fn next_entry_id(last: &mut i64, now: DateTime<Utc>) -> i64 {
    let id = now.timestamp_millis().max(*last + 1);
    *last = id;
    id
}
