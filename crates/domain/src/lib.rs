// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod authorization;
mod catalog;
mod cinema;
mod customer;
mod error;
mod loyalty;
mod movie;
mod position;
mod records;
mod shared;
mod shift;
mod staff;
mod validation;

#[cfg(test)]
mod tests;

pub use authorization::AuthorizationService;
pub use catalog::CatalogLookup;
pub use cinema::Cinema;
pub use customer::CustomerAccount;
pub use error::DomainError;
pub use loyalty::{GOLD_THRESHOLD, LoyaltyTier, POINTS_PER_TICKET, SILVER_THRESHOLD};
pub use movie::{CLASSIC_CUTOFF_YEAR, HIGH_RATING_THRESHOLD, Movie};
pub use position::{Position, Role};
pub use records::{CinemaRecord, CustomerRecord, MovieRecord, StaffRecord};
pub use shared::{MovieHandle, Shared, StaffHandle};
pub use shift::Shift;
pub use staff::{HOURS_PER_SHIFT, StaffMember};
pub use validation::{MAX_RATING, validate_email};
