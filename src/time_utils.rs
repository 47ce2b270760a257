// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

/// Format used for ledger keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of "now" for the store.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
    /// Calendar date of the user's day.
    fn today(&self) -> NaiveDate;
}

/// Wall clock; "today" is resolved in the local timezone at call time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one instant in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }

    /// Parse an RFC3339 timestamp, keeping its offset as the local timezone.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self::new)
    }

    /// Move the clock to a new instant.
    pub fn set(&mut self, at: DateTime<FixedOffset>) {
        self.at = at;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at.with_timezone(&Utc)
    }

    fn today(&self) -> NaiveDate {
        self.at.date_naive()
    }
}

/// Ledger key for a calendar date (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a ledger key back into a date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}
