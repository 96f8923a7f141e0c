// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// A single work shift, identified by its date and start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shift {
    date: Date,
    time: Time,
}

impl Shift {
    /// Creates a new `Shift`.
    #[must_use]
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Parses a shift from its text form (`"2025-06-01"`, `"08:00"`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if either part fails to parse.
    pub fn parse(date: &str, time: &str) -> Result<Self, DomainError> {
        let parsed_date: Date = Date::parse(date, DATE_FORMAT).map_err(|e| {
            DomainError::invalid(format!("Failed to parse shift date '{date}': {e}"))
        })?;
        let parsed_time: Time = Time::parse(time, TIME_FORMAT).map_err(|e| {
            DomainError::invalid(format!("Failed to parse shift time '{time}': {e}"))
        })?;
        Ok(Self::new(parsed_date, parsed_time))
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> Time {
        self.time
    }

    /// Formats the date as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_text(&self) -> String {
        self.date
            .format(DATE_FORMAT)
            .unwrap_or_else(|_| self.date.to_string())
    }

    /// Formats the start time as `HH:MM`.
    #[must_use]
    pub fn time_text(&self) -> String {
        self.time
            .format(TIME_FORMAT)
            .unwrap_or_else(|_| self.time.to_string())
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date_text(), self.time_text())
    }
}
