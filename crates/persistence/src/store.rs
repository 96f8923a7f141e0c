// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use kino_domain::{
    Cinema, CinemaRecord, CustomerAccount, CustomerRecord, Movie, MovieRecord, StaffMember,
    StaffRecord,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::config::JsonStoreConfig;
use crate::error::PersistenceError;

/// Reads and writes entity records as JSON text files.
///
/// Entities are converted to their flat record form before encoding,
/// and decoded records pass back through the entity constructors so
/// every invariant is re-checked on load.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    config: JsonStoreConfig,
}

impl JsonStore {
    /// Creates a store with the given output settings.
    #[must_use]
    pub const fn new(config: JsonStoreConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &JsonStoreConfig {
        &self.config
    }

    /// Encodes any serializable value as indented JSON text.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the value cannot be represented as JSON.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, PersistenceError> {
        let indent: Vec<u8> = vec![b' '; self.config.indent];
        let mut buffer: Vec<u8> = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut serializer)?;

        let mut text: String = String::from_utf8(buffer)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        if self.config.trailing_newline {
            text.push('\n');
        }
        Ok(text)
    }

    /// Decodes JSON text into a record type.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` naming the first absent required field, or
    /// `SerializationError` for malformed text and mistyped fields.
    pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, PersistenceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decodes a movie, restoring its view count.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid movie record.
    pub fn decode_movie(text: &str) -> Result<Movie, PersistenceError> {
        let record: MovieRecord = Self::decode(text)?;
        Ok(Movie::from_record(record)?)
    }

    /// Decodes a staff member including shifts and completed tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid staff record.
    pub fn decode_staff(text: &str) -> Result<StaffMember, PersistenceError> {
        let record: StaffRecord = Self::decode(text)?;
        Ok(StaffMember::from_record(record)?)
    }

    /// Decodes a cinema. Only the schedule is restored; staff entries are
    /// descriptive text and are not rebuilt.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid cinema record.
    pub fn decode_cinema(text: &str) -> Result<Cinema, PersistenceError> {
        let record: CinemaRecord = Self::decode(text)?;
        Ok(Cinema::from_record(record)?)
    }

    /// Decodes a customer account including its ticket history.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid customer record.
    pub fn decode_customer(text: &str) -> Result<CustomerAccount, PersistenceError> {
        let record: CustomerRecord = Self::decode(text)?;
        Ok(CustomerAccount::from_record(record)?)
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn save_movie(&self, path: impl AsRef<Path>, movie: &Movie) -> Result<(), PersistenceError> {
        let text: String = self.encode(&movie.to_record())?;
        self.write(path.as_ref(), &text)?;
        info!(path = %path.as_ref().display(), title = movie.title(), "Saved movie");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or a decoding error.
    pub fn read_movie(path: impl AsRef<Path>) -> Result<Movie, PersistenceError> {
        let movie: Movie = Self::decode_movie(&read(path.as_ref())?)?;
        debug!(path = %path.as_ref().display(), title = movie.title(), "Loaded movie");
        Ok(movie)
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn save_staff(
        &self,
        path: impl AsRef<Path>,
        staff: &StaffMember,
    ) -> Result<(), PersistenceError> {
        let text: String = self.encode(&staff.to_record())?;
        self.write(path.as_ref(), &text)?;
        info!(path = %path.as_ref().display(), staff = %staff.full_name(), "Saved staff member");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or a decoding error.
    pub fn read_staff(path: impl AsRef<Path>) -> Result<StaffMember, PersistenceError> {
        let staff: StaffMember = Self::decode_staff(&read(path.as_ref())?)?;
        debug!(path = %path.as_ref().display(), staff = %staff.full_name(), "Loaded staff member");
        Ok(staff)
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn save_cinema(&self, path: impl AsRef<Path>, cinema: &Cinema) -> Result<(), PersistenceError> {
        let text: String = self.encode(&cinema.to_record())?;
        self.write(path.as_ref(), &text)?;
        info!(
            path = %path.as_ref().display(),
            cinema = cinema.name(),
            movies = cinema.schedule().len(),
            "Saved cinema"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or a decoding error.
    pub fn read_cinema(path: impl AsRef<Path>) -> Result<Cinema, PersistenceError> {
        let cinema: Cinema = Self::decode_cinema(&read(path.as_ref())?)?;
        debug!(path = %path.as_ref().display(), cinema = cinema.name(), "Loaded cinema");
        Ok(cinema)
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn save_customer(
        &self,
        path: impl AsRef<Path>,
        customer: &CustomerAccount,
    ) -> Result<(), PersistenceError> {
        let text: String = self.encode(&customer.to_record())?;
        self.write(path.as_ref(), &text)?;
        info!(path = %path.as_ref().display(), customer = %customer.full_name(), "Saved customer");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or a decoding error.
    pub fn read_customer(path: impl AsRef<Path>) -> Result<CustomerAccount, PersistenceError> {
        let customer: CustomerAccount = Self::decode_customer(&read(path.as_ref())?)?;
        debug!(path = %path.as_ref().display(), customer = %customer.full_name(), "Loaded customer");
        Ok(customer)
    }

    /// Writes the cinema's schedule as a JSON array of movie records.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn export_schedule(
        &self,
        path: impl AsRef<Path>,
        cinema: &Cinema,
    ) -> Result<(), PersistenceError> {
        let records: Vec<MovieRecord> = cinema
            .schedule()
            .iter()
            .map(|movie| movie.borrow().to_record())
            .collect();
        let text: String = self.encode(&records)?;
        self.write(path.as_ref(), &text)?;
        info!(
            path = %path.as_ref().display(),
            cinema = cinema.name(),
            movies = records.len(),
            "Exported schedule"
        );
        Ok(())
    }

    /// Reads a schedule written by [`Self::export_schedule`].
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or a decoding error for
    /// any entry.
    pub fn read_schedule(path: impl AsRef<Path>) -> Result<Vec<Movie>, PersistenceError> {
        let records: Vec<MovieRecord> = Self::decode(&read(path.as_ref())?)?;
        records
            .into_iter()
            .map(|record| Movie::from_record(record).map_err(PersistenceError::from))
            .collect()
    }

    /// Writes the display text of a value exactly, e.g. a movie description
    /// card. `trailing_newline` applies to JSON output only.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn save_text(
        &self,
        path: impl AsRef<Path>,
        value: &impl Display,
    ) -> Result<(), PersistenceError> {
        let text: String = value.to_string();
        self.write(path.as_ref(), &text)?;
        debug!(path = %path.as_ref().display(), bytes = text.len(), "Saved text");
        Ok(())
    }

    fn write(&self, path: &Path, text: &str) -> Result<(), PersistenceError> {
        let parent: Option<&Path> = path
            .parent()
            .filter(|p| self.config.create_parent_dirs && !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, &e))?;
        }
        fs::write(path, text).map_err(|e| PersistenceError::io(path, &e))
    }
}

fn read(path: &Path) -> Result<String, PersistenceError> {
    fs::read_to_string(path).map_err(|e| PersistenceError::io(path, &e))
}
