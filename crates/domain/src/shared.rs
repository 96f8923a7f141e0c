// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared, mutable handles to entities.
//!
//! A movie can sit in a cinema's schedule and in several customers' ticket
//! histories at once, and a `watch()` through any of them must be visible
//! through all of them. Cloning a [`Shared`] clones the handle, never the
//! entity.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::movie::Movie;
use crate::staff::StaffMember;

/// A reference-counted handle to a single entity instance.
pub struct Shared<T>(Rc<RefCell<T>>);

/// Handle to a shared [`Movie`].
pub type MovieHandle = Shared<Movie>;

/// Handle to a shared [`StaffMember`].
pub type StaffHandle = Shared<StaffMember>;

impl<T> Shared<T> {
    /// Wraps an entity in a new handle.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Immutably borrows the entity.
    ///
    /// # Panics
    ///
    /// Panics if the entity is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrows the entity.
    ///
    /// # Panics
    ///
    /// Panics if the entity is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles point at the same entity instance.
    ///
    /// Two structurally identical entities created separately are not the
    /// same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&*self.0.borrow()).finish()
    }
}
