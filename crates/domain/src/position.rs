// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::require_non_empty;

/// Staff roles for authorization.
///
/// Roles determine which cinema mutations a staff member may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Manager role: may edit the schedule and the staff roster.
    Manager,
    /// Any other position (cashier, projectionist, cleaner, ...).
    Employee,
}

impl Role {
    /// Parses a role from a free-text position title.
    ///
    /// Matching is case-insensitive: `"manager"`, `"Manager"` and
    /// `"MANAGER"` all parse to `Role::Manager`. Every other title is an
    /// employee.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        if fold_title(title) == Self::MANAGER_TITLE {
            Self::Manager
        } else {
            Self::Employee
        }
    }

    /// Canonical title for the manager role.
    pub const MANAGER_TITLE: &'static str = "manager";

    /// Returns whether this role may change the schedule or staff roster.
    #[must_use]
    pub const fn can_manage_schedule(&self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A staff member's position.
///
/// The title is kept exactly as entered (it is what gets displayed and
/// persisted); the role is derived from it once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// The free-text title (e.g., "manager", "Projectionist").
    title: String,
    /// The role parsed from the title.
    role: Role,
}

impl Position {
    /// Creates a new `Position` from a title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the title is empty.
    pub fn new(title: &str) -> Result<Self, DomainError> {
        require_non_empty("Position", title)?;
        Ok(Self {
            title: title.to_string(),
            role: Role::from_title(title),
        })
    }

    /// Returns the title as entered.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the role derived from the title.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` if the title matches `other` case-insensitively.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        fold_title(&self.title) == fold_title(other)
    }
}

/// Case folding shared by role parsing and title matching.
fn fold_title(title: &str) -> String {
    title.to_lowercase()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
