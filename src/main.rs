// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitGod daily report
//!
//! Opens the local tracker state and logs today's progress against the
//! profile's goals.

use anyhow::Context;
use fitgod_tracker::{
    config::Config,
    services::{dashboard::active_challenge_progress, DailySummary},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting FitGod tracker");

    let mut state = AppState::open(config).context("Failed to open tracker state")?;

    let today = state.store.today();
    if let Some(quote) = state.catalogs.challenges.quote_for(today) {
        tracing::info!(quote, "Quote of the day");
    }

    let progress = state.store.get_current_day_progress()?;
    match state.store.profile() {
        Some(profile) => {
            let summary = DailySummary::build(profile, &progress);
            tracing::info!(
                date = %summary.date,
                calories = summary.calories.consumed,
                calorie_goal = summary.calories.goal,
                protein = summary.protein.consumed,
                water_ml = summary.water.consumed,
                steps = summary.steps.consumed,
                entries = progress.food_entries.len(),
                "Daily progress"
            );
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        None => tracing::info!("No profile configured yet"),
    }

    for challenge in active_challenge_progress(&state.store, &state.catalogs.challenges) {
        tracing::info!(
            challenge_id = %challenge.challenge_id,
            day = challenge.day,
            duration = challenge.duration,
            "Active challenge"
        );
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fitgod_tracker=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
