// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DomainError;

/// `local@domain.tld`, anchored at the start only.
#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("valid regex"));

/// Upper bound of the movie rating scale.
pub const MAX_RATING: f64 = 10.0;

/// Validates that a required text field is not empty.
///
/// # Arguments
///
/// * `field` - The field name, used in the error message
/// * `value` - The value to check
///
/// # Errors
///
/// Returns `DomainError::InvalidArgument` if the value is empty.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::invalid(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Validates that a rating is a finite number on the `0..=10` scale.
///
/// # Errors
///
/// Returns `DomainError::InvalidArgument` if the rating is NaN, infinite or
/// outside the scale.
pub fn validate_rating(rating: f64) -> Result<(), DomainError> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(DomainError::invalid(format!(
            "Rating must be between 0 and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Validates the basic `local@domain.tld` shape of an email address.
///
/// The check is a prefix match: a non-empty local part, an `@`, then a run
/// of non-`@` characters that contains a dot with at least one character on
/// each side. Anything after that run is not inspected.
///
/// # Errors
///
/// Returns `DomainError::InvalidArgument` if the address does not have that shape.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(DomainError::invalid(format!("Invalid email format: '{email}'")))
    }
}

/// Renders a rating with at least one decimal digit (`8.0`, `8.8`, `10.0`).
#[must_use]
pub fn format_rating(rating: f64) -> String {
    let text: String = rating.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
