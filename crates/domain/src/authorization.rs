// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role checks for manager-gated cinema operations.

use crate::error::DomainError;
use crate::position::Role;
use crate::staff::StaffMember;

/// Authorization service for enforcing role-based access control.
///
/// Every schedule or roster mutation other than a plain staff assignment is
/// gated through here.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if a staff member is authorized to perform a schedule or
    /// roster change.
    ///
    /// Only managers may perform these actions.
    ///
    /// # Arguments
    ///
    /// * `actor` - The staff member attempting the action
    /// * `action` - The action name, reported in the error
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PermissionDenied` if the actor is not a manager.
    pub fn authorize_schedule_change(actor: &StaffMember, action: &str) -> Result<(), DomainError> {
        if actor.role().can_manage_schedule() {
            return Ok(());
        }
        Err(DomainError::PermissionDenied {
            action: action.to_string(),
            required_role: Role::Manager.as_str().to_string(),
        })
    }
}
