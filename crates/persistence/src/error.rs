// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kino_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while reading or writing records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// A file could not be read or written.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The file path.
        path: String,
        /// The underlying error message.
        message: String,
    },
    /// A required field is absent from a record.
    #[error("Missing field: {field}")]
    MissingField {
        /// The field name as it appears in the record.
        field: String,
    },
    /// The text is not valid JSON or a field has the wrong type.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// The record decoded but failed entity validation.
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] DomainError),
}

impl PersistenceError {
    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        let message: String = err.to_string();
        // Relies on serde's wording "missing field `name` at line L column C".
        // Any other wording falls through to SerializationError.
        message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split_once('`'))
            .map_or_else(
                || Self::SerializationError(message.clone()),
                |(field, _)| Self::MissingField {
                    field: field.to_string(),
                },
            )
    }
}
