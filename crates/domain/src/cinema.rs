// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The cinema aggregate: schedule and staff roster.
//!
//! Schedule and roster changes other than [`Cinema::assign_staff`] and
//! [`Cinema::clear_schedule`] must be made by a manager. Membership checks
//! compare handle identity, so two separately created movies with equal
//! fields are distinct schedule entries.

use std::collections::BTreeMap;

use tracing::debug;

use crate::authorization::AuthorizationService;
use crate::catalog::CatalogLookup;
use crate::error::DomainError;
use crate::movie::Movie;
use crate::records::CinemaRecord;
use crate::shared::{MovieHandle, StaffHandle};
use crate::staff::StaffMember;
use crate::validation::require_non_empty;

/// A single cinema.
#[derive(Debug, Clone)]
pub struct Cinema {
    name: String,
    address: String,
    /// Scheduled movies in insertion order. No handle appears twice.
    schedule: Vec<MovieHandle>,
    /// Staff roster. The same person may be assigned more than once.
    staff: Vec<StaffHandle>,
}

impl Cinema {
    /// Creates a new `Cinema` with an empty schedule and roster.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the name or address is empty.
    pub fn new(name: &str, address: &str) -> Result<Self, DomainError> {
        require_non_empty("Cinema name", name)?;
        require_non_empty("Cinema address", address)?;
        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            schedule: Vec::new(),
            staff: Vec::new(),
        })
    }

    /// Rebuilds a cinema from its record.
    ///
    /// The schedule is rehydrated into fresh movie handles. The staff list in
    /// a record holds descriptions only, so the roster starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the name, address or any scheduled movie fails
    /// validation.
    pub fn from_record(record: CinemaRecord) -> Result<Self, DomainError> {
        let mut cinema: Self = Self::new(&record.name, &record.address)?;
        cinema.schedule = record
            .schedule
            .into_iter()
            .map(|m| Movie::from_record(m).map(MovieHandle::new))
            .collect::<Result<Vec<MovieHandle>, DomainError>>()?;
        Ok(cinema)
    }

    /// Converts this cinema to its structured record.
    #[must_use]
    pub fn to_record(&self) -> CinemaRecord {
        CinemaRecord {
            name: self.name.clone(),
            address: self.address.clone(),
            schedule: self.schedule.iter().map(|m| m.borrow().to_record()).collect(),
            staff: self.staff.iter().map(|s| s.borrow().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the scheduled movies in insertion order.
    #[must_use]
    pub fn schedule(&self) -> &[MovieHandle] {
        &self.schedule
    }

    #[must_use]
    pub fn staff(&self) -> &[StaffHandle] {
        &self.staff
    }

    /// Adds a staff member to the roster. No role check, no duplicate check.
    pub fn assign_staff(&mut self, member: StaffHandle) {
        debug!(cinema = %self.name, staff = %member.borrow(), "Assigned staff member");
        self.staff.push(member);
    }

    /// Returns the staff whose position matches `role`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `role` is empty.
    pub fn get_staff_by_role(&self, role: &str) -> Result<Vec<StaffHandle>, DomainError> {
        require_non_empty("Role", role)?;
        Ok(self
            .staff
            .iter()
            .filter(|s| s.borrow().position().matches(role))
            .cloned()
            .collect())
    }

    /// Adds a staff member on behalf of a manager.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requester is not a manager
    /// - The same staff member instance is already on the roster
    pub fn add_staff_member(
        &mut self,
        requester: &StaffMember,
        new_member: StaffHandle,
    ) -> Result<(), DomainError> {
        AuthorizationService::authorize_schedule_change(requester, "add_staff_member")?;

        if self.staff.iter().any(|s| s.ptr_eq(&new_member)) {
            return Err(DomainError::AlreadyExists(format!(
                "Staff member '{}'",
                new_member.borrow().full_name()
            )));
        }

        debug!(
            cinema = %self.name,
            requester = %requester.full_name(),
            staff = %new_member.borrow(),
            "Added staff member"
        );
        self.staff.push(new_member);
        Ok(())
    }

    /// Appends a movie to the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The acting staff member is not a manager
    /// - The same movie instance is already scheduled
    pub fn add_movie(&mut self, acting: &StaffMember, movie: MovieHandle) -> Result<(), DomainError> {
        AuthorizationService::authorize_schedule_change(acting, "add_movie")?;

        if self.contains_movie(&movie) {
            return Err(DomainError::AlreadyExists(format!(
                "Movie '{}' in schedule",
                movie.borrow().title()
            )));
        }

        debug!(cinema = %self.name, title = %movie.borrow().title(), "Added movie to schedule");
        self.schedule.push(movie);
        Ok(())
    }

    /// Removes a movie instance from the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The acting staff member is not a manager
    /// - The movie instance is not scheduled
    pub fn remove_movie(&mut self, acting: &StaffMember, movie: &MovieHandle) -> Result<(), DomainError> {
        AuthorizationService::authorize_schedule_change(acting, "remove_movie")?;

        let index: usize = self
            .schedule
            .iter()
            .position(|m| m.ptr_eq(movie))
            .ok_or_else(|| {
                DomainError::NotFound(format!("Movie '{}' in schedule", movie.borrow().title()))
            })?;

        self.schedule.remove(index);
        debug!(cinema = %self.name, title = %movie.borrow().title(), "Removed movie from schedule");
        Ok(())
    }

    /// Empties the schedule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PermissionDenied` if the acting staff member is
    /// not a manager.
    pub fn remove_all_movies(&mut self, acting: &StaffMember) -> Result<(), DomainError> {
        AuthorizationService::authorize_schedule_change(acting, "remove_all_movies")?;
        debug!(cinema = %self.name, removed = self.schedule.len(), "Removed all movies");
        self.schedule.clear();
        Ok(())
    }

    /// Adds a selection of movies to the schedule, skipping instances that
    /// are already scheduled.
    ///
    /// The selection is validated as a whole before anything is inserted: if
    /// any entry is missing the schedule is left untouched.
    ///
    /// # Arguments
    ///
    /// * `acting` - The staff member making the selection
    /// * `movies` - The selection; `None` means no list was supplied
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No list is supplied (`DomainError::InvalidArgument`)
    /// - The acting staff member is not a manager
    /// - Any entry in the list is `None` (`DomainError::InvalidArgument`)
    pub fn choose_movies_to_play(
        &mut self,
        acting: &StaffMember,
        movies: Option<&[Option<MovieHandle>]>,
    ) -> Result<(), DomainError> {
        let movies: &[Option<MovieHandle>] =
            movies.ok_or_else(|| DomainError::invalid("Movies must be provided as a list"))?;
        AuthorizationService::authorize_schedule_change(acting, "choose_movies_to_play")?;

        let selection: Vec<&MovieHandle> = movies
            .iter()
            .map(|m| {
                m.as_ref()
                    .ok_or_else(|| DomainError::invalid("Movie in selection cannot be None"))
            })
            .collect::<Result<Vec<&MovieHandle>, DomainError>>()?;

        let before: usize = self.schedule.len();
        for movie in selection {
            if !self.contains_movie(movie) {
                self.schedule.push(movie.clone());
            }
        }

        debug!(
            cinema = %self.name,
            selected = movies.len(),
            added = self.schedule.len() - before,
            "Chose movies to play"
        );
        Ok(())
    }

    /// Returns the titles of all scheduled movies.
    #[must_use]
    pub fn list_movies(&self) -> Vec<String> {
        self.schedule
            .iter()
            .map(|m| m.borrow().title().to_string())
            .collect()
    }

    /// Returns `true` if a scheduled movie has exactly this title.
    #[must_use]
    pub fn has_movie(&self, title: &str) -> bool {
        self.schedule.iter().any(|m| m.borrow().title() == title)
    }

    /// Finds the first scheduled movie whose title matches, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title is empty (`DomainError::InvalidArgument`)
    /// - No scheduled movie matches (`DomainError::NotFound`)
    pub fn get_movie_by_title(&self, title: &str) -> Result<MovieHandle, DomainError> {
        require_non_empty("Movie title", title)?;
        let wanted: String = title.to_lowercase();
        self.schedule
            .iter()
            .find(|m| m.borrow().title().to_lowercase() == wanted)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Movie titled '{title}'")))
    }

    /// Returns the scheduled movies of a genre, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the genre is empty.
    pub fn get_movies_by_genre(&self, genre: &str) -> Result<Vec<MovieHandle>, DomainError> {
        require_non_empty("Genre", genre)?;
        let wanted: String = genre.to_lowercase();
        Ok(self
            .schedule
            .iter()
            .filter(|m| m.borrow().genre().to_lowercase() == wanted)
            .cloned()
            .collect())
    }

    /// Returns the short description of every scheduled movie.
    #[must_use]
    pub fn list_current_movies(&self) -> Vec<String> {
        self.schedule
            .iter()
            .map(|m| m.borrow().short_description())
            .collect()
    }

    /// Returns the full description of every scheduled movie, separated by
    /// blank lines.
    #[must_use]
    pub fn get_movie_details(&self) -> String {
        self.schedule
            .iter()
            .map(|m| m.borrow().to_string())
            .collect::<Vec<String>>()
            .join("\n\n")
    }

    /// Empties the schedule without a role check.
    pub fn clear_schedule(&mut self) {
        self.schedule.clear();
    }

    /// Counts scheduled movies per genre (genre text as stored).
    #[must_use]
    pub fn count_movies_by_genre(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for movie in &self.schedule {
            *counts.entry(movie.borrow().genre().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Removes every roster entry with this exact first and last name.
    ///
    /// Does nothing if no one matches.
    pub fn remove_staff_member_by_name(&mut self, first_name: &str, last_name: &str) {
        let before: usize = self.staff.len();
        self.staff.retain(|s| {
            let member = s.borrow();
            !(member.first_name() == first_name && member.last_name() == last_name)
        });
        debug!(
            cinema = %self.name,
            removed = before - self.staff.len(),
            "Removed staff by name"
        );
    }

    fn contains_movie(&self, movie: &MovieHandle) -> bool {
        self.schedule.iter().any(|m| m.ptr_eq(movie))
    }
}

impl CatalogLookup for Cinema {
    fn movies_by_genre(&self, genre: &str) -> Result<Vec<MovieHandle>, DomainError> {
        self.get_movies_by_genre(genre)
    }
}

impl std::fmt::Display for Cinema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cinema: {}, {}", self.name, self.address)
    }
}
