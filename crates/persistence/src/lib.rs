// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON file persistence for the kino domain.
//!
//! Entities are stored through their flat record types from `kino-domain`.
//! Writing goes through a [`JsonStore`] so output formatting follows its
//! [`JsonStoreConfig`]. Reading is configuration-free and every decoded
//! record is re-validated by the entity constructors.
//!
//! ## What round-trips
//!
//! - Movies, including the view count.
//! - Staff members, including shifts and completed tasks.
//! - Customers, including ticket history. History entries come back as
//!   fresh movie handles and no longer share state with any cinema.
//! - Cinemas restore their schedule only. Staff are exported as
//!   descriptive text and are not rebuilt.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod store;

#[cfg(test)]
mod tests;

pub use config::JsonStoreConfig;
pub use error::PersistenceError;
pub use store::JsonStore;
