// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised by cinema, staff, movie and customer operations.
///
/// `InvalidArgument` is always the caller's fault and avoidable by checking
/// inputs first. The remaining variants are expected outcomes of the business
/// rules (a worker trying to edit the schedule, a minor buying a ticket).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An argument was empty, malformed or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The acting staff member lacks the role the action requires.
    #[error("Permission denied: '{action}' requires {required_role} role")]
    PermissionDenied {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The entity is already present in the target collection.
    #[error("{0} already exists")]
    AlreadyExists(String),
    /// A lookup or removal target does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// A shift with the same date and time is already assigned.
    #[error("Shift already assigned for {date} at {time}")]
    DuplicateEntry {
        /// The shift date.
        date: String,
        /// The shift start time.
        time: String,
    },
    /// The credentials matched but the account has not been activated.
    #[error("Account is not active")]
    AccountInactive,
    /// The email or password did not match.
    #[error("Invalid login credentials")]
    InvalidCredentials,
    /// The customer is younger than the movie's age restriction.
    #[error("Age restriction not met: requires {required}+, customer is {actual}")]
    AgeRestricted {
        /// The minimum age required by the movie.
        required: u32,
        /// The customer's age.
        actual: u32,
    },
}

impl DomainError {
    /// Shorthand for building an `InvalidArgument` error.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
