// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitGod: personal fitness tracking core
//!
//! This crate provides the state store behind the FitGod app: the user
//! profile, a per-day ledger of food, water, steps and weight, challenge
//! membership, and the metabolic needs calculator, all persisted to local
//! storage.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::LocalStorage;
use error::Result;
use services::{Catalogs, ProgressStore};
use time_utils::{Clock, SystemClock};

/// Shared application state.
pub struct AppState<C: Clock = SystemClock> {
    pub config: Config,
    pub store: ProgressStore<C>,
    pub catalogs: Catalogs,
}

impl AppState<SystemClock> {
    /// Open persisted storage and catalogs as described by `config`.
    pub fn open(config: Config) -> Result<Self> {
        let storage = LocalStorage::open(&config.data_dir)?;
        Self::with_storage(config, storage, SystemClock)
    }
}

impl<C: Clock> AppState<C> {
    /// Build state on an explicit storage backend and clock.
    pub fn with_storage(config: Config, storage: LocalStorage, clock: C) -> Result<Self> {
        let catalogs = match &config.catalog_dir {
            Some(dir) => Catalogs::load_from_dir(dir)?,
            None => Catalogs::builtin()?,
        };
        let store = ProgressStore::open_with_clock(storage, &config.storage_key, clock)?;

        Ok(Self {
            config,
            store,
            catalogs,
        })
    }
}
