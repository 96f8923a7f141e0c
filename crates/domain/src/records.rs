// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structured records exchanged with the persistence layer.
//!
//! Entities convert to these with `to_record()` and are rebuilt with
//! `from_record()`, which re-runs constructor validation. Encoding to text
//! and file handling are not done here.

use serde::{Deserialize, Serialize};

/// Serializable representation of a `Movie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub genre: String,
    pub duration: u32,
    pub age_restriction: u32,
    pub director: String,
    pub language: String,
    pub release_year: i32,
    pub rating: f64,
    pub description: String,
    /// Absent in older exports; read back as 0.
    #[serde(default)]
    pub views: u64,
}

/// Serializable representation of a `StaffMember`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    /// `[date, time]` pairs, e.g. `["2025-06-01", "08:00"]`.
    #[serde(default)]
    pub shifts: Vec<(String, String)>,
    #[serde(default)]
    pub tasks_completed: Vec<String>,
}

/// Serializable representation of a `Cinema`.
///
/// Staff are exported as their one-line descriptions only and are not read
/// back; the schedule round-trips in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CinemaRecord {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub schedule: Vec<MovieRecord>,
    #[serde(default)]
    pub staff: Vec<String>,
}

/// Serializable representation of a `CustomerAccount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub loyalty_points: u32,
    /// The ticket history, oldest purchase first.
    #[serde(default)]
    pub watch_history: Vec<MovieRecord>,
}
