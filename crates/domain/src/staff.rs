// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff members, their shifts and completed tasks.

use std::collections::HashSet;

use time::Date;

use crate::error::DomainError;
use crate::position::{Position, Role};
use crate::records::StaffRecord;
use crate::shift::Shift;
use crate::validation::require_non_empty;

/// Every shift counts as this many working hours.
pub const HOURS_PER_SHIFT: u32 = 5;

/// A cinema employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    first_name: String,
    last_name: String,
    position: Position,
    /// Assigned shifts in assignment order. No two share a date and time.
    shifts: Vec<Shift>,
    /// Completed tasks in completion order. Repeats are allowed.
    tasks_completed: Vec<String>,
}

impl StaffMember {
    /// Creates a new `StaffMember` with no shifts or tasks.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if any field is empty.
    pub fn new(first_name: &str, last_name: &str, position: &str) -> Result<Self, DomainError> {
        require_non_empty("First name", first_name)?;
        require_non_empty("Last name", last_name)?;
        let position: Position = Position::new(position)?;

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            position,
            shifts: Vec::new(),
            tasks_completed: Vec::new(),
        })
    }

    /// Rebuilds a staff member from its record.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is empty, a shift fails to parse, or the
    /// record lists the same shift twice.
    pub fn from_record(record: StaffRecord) -> Result<Self, DomainError> {
        let mut member: Self = Self::new(&record.first_name, &record.last_name, &record.position)?;
        for (date, time) in &record.shifts {
            member.assign_shift(Shift::parse(date, time)?)?;
        }
        member.tasks_completed = record.tasks_completed;
        Ok(member)
    }

    /// Converts this staff member to its structured record.
    #[must_use]
    pub fn to_record(&self) -> StaffRecord {
        StaffRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            position: self.position.title().to_string(),
            shifts: self
                .shifts
                .iter()
                .map(|s| (s.date_text(), s.time_text()))
                .collect(),
            tasks_completed: self.tasks_completed.clone(),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.position.role()
    }

    #[must_use]
    pub const fn is_manager(&self) -> bool {
        matches!(self.position.role(), Role::Manager)
    }

    /// Returns the assigned shifts in assignment order.
    #[must_use]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    #[must_use]
    pub fn completed_tasks(&self) -> &[String] {
        &self.tasks_completed
    }

    /// Assigns a shift.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateEntry` if a shift with the same date
    /// and time is already assigned.
    pub fn assign_shift(&mut self, shift: Shift) -> Result<(), DomainError> {
        if self.shifts.contains(&shift) {
            return Err(DomainError::DuplicateEntry {
                date: shift.date_text(),
                time: shift.time_text(),
            });
        }
        self.shifts.push(shift);
        Ok(())
    }

    /// Returns `true` if the given slot is not already assigned.
    #[must_use]
    pub fn is_available(&self, shift: &Shift) -> bool {
        !self.shifts.contains(shift)
    }

    /// Records a completed task.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the task is empty.
    pub fn complete_task(&mut self, task: &str) -> Result<(), DomainError> {
        require_non_empty("Task", task)?;
        self.tasks_completed.push(task.to_string());
        Ok(())
    }

    #[must_use]
    pub fn has_task(&self, task: &str) -> bool {
        self.tasks_completed.iter().any(|t| t == task)
    }

    /// Changes the position title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the new title is empty or
    /// identical to the current one.
    pub fn change_position(&mut self, new_position: &str) -> Result<(), DomainError> {
        require_non_empty("New position", new_position)?;
        if new_position == self.position.title() {
            return Err(DomainError::invalid(
                "New position must be different from the current one",
            ));
        }
        self.position = Position::new(new_position)?;
        Ok(())
    }

    #[must_use]
    pub fn total_hours_assigned(&self) -> u32 {
        u32::try_from(self.shifts.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(HOURS_PER_SHIFT)
    }

    /// Counts the distinct dates across all shifts.
    #[must_use]
    pub fn worked_days(&self) -> usize {
        self.shifts
            .iter()
            .map(Shift::date)
            .collect::<HashSet<Date>>()
            .len()
    }

    pub fn clear_schedule(&mut self) {
        self.shifts.clear();
    }

    pub fn reset_tasks(&mut self) {
        self.tasks_completed.clear();
    }
}

impl std::fmt::Display for StaffMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} - {}", self.first_name, self.last_name, self.position)
    }
}
