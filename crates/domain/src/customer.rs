// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Customer accounts: credentials, ticket history and loyalty points.

use tracing::debug;

use crate::catalog::CatalogLookup;
use crate::error::DomainError;
use crate::loyalty::{LoyaltyTier, POINTS_PER_TICKET};
use crate::movie::Movie;
use crate::records::CustomerRecord;
use crate::shared::MovieHandle;
use crate::validation::validate_email;

/// An end-user account.
///
/// The email format is checked once, at construction.
#[derive(Debug, Clone)]
pub struct CustomerAccount {
    first_name: String,
    last_name: String,
    age: u32,
    email: String,
    /// Compared verbatim on login.
    password: String,
    is_active: bool,
    /// Purchased tickets, oldest first. Only grows through `buy_ticket`.
    ticket_history: Vec<MovieHandle>,
    loyalty_points: u32,
}

impl CustomerAccount {
    /// Creates a new, inactive `CustomerAccount` with no points.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the email does not have a
    /// `local@domain.tld` shape.
    pub fn new(
        first_name: &str,
        last_name: &str,
        age: u32,
        email: &str,
        password: &str,
    ) -> Result<Self, DomainError> {
        validate_email(email)?;
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            email: email.to_string(),
            password: password.to_string(),
            is_active: false,
            ticket_history: Vec::new(),
            loyalty_points: 0,
        })
    }

    /// Rebuilds an account from its record. The watch history becomes a
    /// ticket history of fresh movie handles.
    ///
    /// # Errors
    ///
    /// Returns an error if the email or any movie in the history fails
    /// validation.
    pub fn from_record(record: CustomerRecord) -> Result<Self, DomainError> {
        let mut customer: Self = Self::new(
            &record.first_name,
            &record.last_name,
            record.age,
            &record.email,
            &record.password,
        )?;
        customer.is_active = record.is_active;
        customer.loyalty_points = record.loyalty_points;
        customer.ticket_history = record
            .watch_history
            .into_iter()
            .map(|m| Movie::from_record(m).map(MovieHandle::new))
            .collect::<Result<Vec<MovieHandle>, DomainError>>()?;
        Ok(customer)
    }

    /// Converts this account to its structured record.
    #[must_use]
    pub fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            email: self.email.clone(),
            password: self.password.clone(),
            is_active: self.is_active,
            loyalty_points: self.loyalty_points,
            watch_history: self
                .ticket_history
                .iter()
                .map(|m| m.borrow().to_record())
                .collect(),
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
    pub const fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    #[must_use]
    pub fn ticket_history(&self) -> &[MovieHandle] {
        &self.ticket_history
    }

    pub fn activate_account(&mut self) {
        debug!(email = %self.email, "Activated account");
        self.is_active = true;
    }

    pub fn deactivate_account(&mut self) {
        debug!(email = %self.email, "Deactivated account");
        self.is_active = false;
    }

    /// Checks credentials. Both the email and the password are compared
    /// exactly (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email or password does not match (`DomainError::InvalidCredentials`)
    /// - The credentials match but the account is inactive
    ///   (`DomainError::AccountInactive`)
    pub fn login(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        if self.email != email || self.password != password {
            return Err(DomainError::InvalidCredentials);
        }
        if !self.is_active {
            return Err(DomainError::AccountInactive);
        }
        Ok(true)
    }

    /// Buys a ticket: records it, counts a view on the movie and grants
    /// loyalty points.
    ///
    /// The account does not need to be active. Nothing changes if the age
    /// check fails.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AgeRestricted` if the customer is younger than
    /// the movie's age restriction.
    pub fn buy_ticket(&mut self, movie: &MovieHandle) -> Result<(), DomainError> {
        let required: u32 = movie.borrow().age_restriction();
        if self.age < required {
            return Err(DomainError::AgeRestricted {
                required,
                actual: self.age,
            });
        }

        self.ticket_history.push(movie.clone());
        movie.borrow_mut().watch();
        self.loyalty_points = self.loyalty_points.saturating_add(POINTS_PER_TICKET);

        debug!(
            email = %self.email,
            title = %movie.borrow().title(),
            loyalty_points = self.loyalty_points,
            "Bought ticket"
        );
        Ok(())
    }

    /// Returns the short description of every purchased ticket, oldest first.
    #[must_use]
    pub fn watch_history(&self) -> Vec<String> {
        self.ticket_history
            .iter()
            .map(|m| m.borrow().short_description())
            .collect()
    }

    #[must_use]
    pub fn has_ticket_for(&self, title: &str) -> bool {
        self.ticket_history.iter().any(|m| m.borrow().title() == title)
    }

    #[must_use]
    pub const fn get_loyalty_status(&self) -> LoyaltyTier {
        LoyaltyTier::from_points(self.loyalty_points)
    }

    pub fn reset_loyalty_points(&mut self) {
        self.loyalty_points = 0;
    }

    /// Spends loyalty points.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `points` is zero or exceeds
    /// the current balance.
    pub fn redeem_points(&mut self, points: u32) -> Result<(), DomainError> {
        if points == 0 {
            return Err(DomainError::invalid("Points must be positive"));
        }
        if points > self.loyalty_points {
            return Err(DomainError::invalid(format!(
                "Not enough points: requested {points}, balance {}",
                self.loyalty_points
            )));
        }
        self.loyalty_points -= points;
        debug!(email = %self.email, redeemed = points, balance = self.loyalty_points, "Redeemed points");
        Ok(())
    }

    #[must_use]
    pub const fn is_eligible_for_discount(&self, min_points: u32) -> bool {
        self.loyalty_points >= min_points
    }

    /// Returns `true` if the account is active and old enough for the movie.
    #[must_use]
    pub const fn can_watch(&self, movie: &Movie) -> bool {
        self.age >= movie.age_restriction() && self.is_active
    }

    /// Recommends a movie from the customer's favourite genre.
    ///
    /// The favourite genre is the most frequent genre in the ticket history;
    /// on a tie the genre whose first purchase came earliest wins. Returns
    /// the first catalog movie of that genre.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if the history is empty or the catalog has no movie of
    ///   the favourite genre
    ///
    /// # Errors
    ///
    /// Returns any error raised by the catalog lookup.
    pub fn recommend_movie(
        &self,
        catalog: &impl CatalogLookup,
    ) -> Result<Option<MovieHandle>, DomainError> {
        let Some(favourite) = self.favourite_genre() else {
            return Ok(None);
        };
        Ok(catalog.movies_by_genre(&favourite)?.into_iter().next())
    }

    fn favourite_genre(&self) -> Option<String> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for movie in &self.ticket_history {
            let genre: String = movie.borrow().genre().to_string();
            match counts.iter_mut().find(|(g, _)| *g == genre) {
                Some((_, count)) => *count += 1,
                None => counts.push((genre, 1)),
            }
        }

        let mut best: Option<(String, usize)> = None;
        for (genre, count) in counts {
            if best.as_ref().is_none_or(|(_, c)| count > *c) {
                best = Some((genre, count));
            }
        }
        best.map(|(genre, _)| genre)
    }
}

impl std::fmt::Display for CustomerAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer: {} {}, {} years old, Email: {}, Active: {}",
            self.first_name, self.last_name, self.age, self.email, self.is_active
        )
    }
}
