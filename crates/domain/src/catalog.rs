// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::shared::MovieHandle;

/// Anything that can list movies of a genre.
///
/// Recommendations only need this query, not a whole cinema.
pub trait CatalogLookup {
    /// Returns the movies of the given genre, in catalog order.
    ///
    /// # Errors
    ///
    /// Implementations may reject an empty genre with
    /// `DomainError::InvalidArgument`.
    fn movies_by_genre(&self, genre: &str) -> Result<Vec<MovieHandle>, DomainError>;
}
