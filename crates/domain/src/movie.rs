// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie catalog entries.

use crate::error::DomainError;
use crate::records::MovieRecord;
use crate::validation::{MAX_RATING, format_rating, require_non_empty, validate_rating};

/// Ratings at or above this value count as highly rated.
pub const HIGH_RATING_THRESHOLD: f64 = 8.0;

/// Movies released before this year are classics.
pub const CLASSIC_CUTOFF_YEAR: i32 = 2000;

/// A movie in the catalog.
///
/// Identity fields are fixed at construction. Only the rating, the view
/// counter and the description change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    title: String,
    genre: String,
    /// Running time in minutes (always positive).
    duration: u32,
    /// Minimum customer age.
    age_restriction: u32,
    director: String,
    language: String,
    release_year: i32,
    /// Always within `0..=10`.
    rating: f64,
    description: String,
    views: u64,
}

impl Movie {
    /// Creates a new `Movie` with zero views.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if:
    /// - The title is empty
    /// - The duration is zero
    /// - The rating is not a finite value between 0 and 10
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: &str,
        genre: &str,
        duration: u32,
        age_restriction: u32,
        director: &str,
        language: &str,
        release_year: i32,
        rating: f64,
        description: &str,
    ) -> Result<Self, DomainError> {
        if duration == 0 {
            return Err(DomainError::invalid("Duration must be a positive number"));
        }
        validate_rating(rating)?;
        require_non_empty("Title", title)?;

        Ok(Self {
            title: title.to_string(),
            genre: genre.to_string(),
            duration,
            age_restriction,
            director: director.to_string(),
            language: language.to_string(),
            release_year,
            rating,
            description: description.to_string(),
            views: 0,
        })
    }

    /// Rebuilds a movie from its record, keeping the stored view count.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails constructor validation.
    pub fn from_record(record: MovieRecord) -> Result<Self, DomainError> {
        let mut movie: Self = Self::new(
            &record.title,
            &record.genre,
            record.duration,
            record.age_restriction,
            &record.director,
            &record.language,
            record.release_year,
            record.rating,
            &record.description,
        )?;
        movie.views = record.views;
        Ok(movie)
    }

    /// Converts this movie to its structured record.
    #[must_use]
    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            title: self.title.clone(),
            genre: self.genre.clone(),
            duration: self.duration,
            age_restriction: self.age_restriction,
            director: self.director.clone(),
            language: self.language.clone(),
            release_year: self.release_year,
            rating: self.rating,
            description: self.description.clone(),
            views: self.views,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub const fn age_restriction(&self) -> u32 {
        self.age_restriction
    }

    #[must_use]
    pub fn director(&self) -> &str {
        &self.director
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn release_year(&self) -> i32 {
        self.release_year
    }

    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns how many times the movie has been watched.
    #[must_use]
    pub const fn views(&self) -> u64 {
        self.views
    }

    /// Records one viewing.
    pub const fn watch(&mut self) {
        self.views += 1;
    }

    /// Returns whether a viewer of the given age meets the age restriction.
    #[must_use]
    pub const fn is_suitable_for_age(&self, age: u32) -> bool {
        age >= self.age_restriction
    }

    /// Raises the rating by `value`, capping it at 10.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `value` is negative or not finite.
    pub fn increase_rating(&mut self, value: f64) -> Result<(), DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::invalid(format!(
                "Cannot increase rating by {value}"
            )));
        }
        self.rating = (self.rating + value).min(MAX_RATING);
        Ok(())
    }

    #[must_use]
    pub fn is_highly_rated(&self) -> bool {
        self.rating >= HIGH_RATING_THRESHOLD
    }

    /// Returns whether the movie is in the given language, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `language` is empty.
    pub fn is_in_language(&self, language: &str) -> Result<bool, DomainError> {
        require_non_empty("Language", language)?;
        Ok(self.language.to_lowercase() == language.to_lowercase())
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the new description is empty.
    pub fn set_description(&mut self, description: &str) -> Result<(), DomainError> {
        require_non_empty("Description", description)?;
        self.description = description.to_string();
        Ok(())
    }

    #[must_use]
    pub const fn is_classic(&self) -> bool {
        self.release_year < CLASSIC_CUTOFF_YEAR
    }

    /// `"{title} ({genre}, {release_year})"`
    #[must_use]
    pub fn short_description(&self) -> String {
        format!("{} ({}, {})", self.title, self.genre, self.release_year)
    }

    /// `"{title} ({release_year}) - {rating}/10"`
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} ({}) - {}/10",
            self.title,
            self.release_year,
            format_rating(self.rating)
        )
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} ({}, {} min, {}+ age)",
            self.title, self.genre, self.duration, self.age_restriction
        )?;
        writeln!(
            f,
            "Directed by: {}, Language: {}, Year: {}",
            self.director, self.language, self.release_year
        )?;
        writeln!(
            f,
            "Rating: {}/10, Views: {}",
            format_rating(self.rating),
            self.views
        )?;
        write!(f, "Description: {}", self.description)
    }
}
