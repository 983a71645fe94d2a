// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `BoundedVec`.
//!
//! These errors represent the recoverable capacity and position conditions.
//! Out-of-range element access is not an `Error`: it is a fatal enforce
//! violation (see [`crate::BoundedVec::at`]).

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`BoundedVec`](crate::BoundedVec).
///
/// Every operation that returns an `Error` leaves the vector unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
    /// An operation required `len == N`, which was not met.
    ///
    /// Currently used by [`BoundedVec::try_into_array`](crate::BoundedVec::try_into_array)
    /// when the vector is not full.
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}

/// A rejected insertion: the [`Error`] and the value that was not stored.
///
/// Returned by [`BoundedVec::push`](crate::BoundedVec::push) and
/// [`BoundedVec::insert`](crate::BoundedVec::insert) so the caller keeps
/// ownership of the element. Converts into [`Error`] with `?` when the value
/// is not needed.
#[derive(Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    error: Error,
    value: T,
}

impl<T> Rejected<T> {
    pub(crate) const fn new(error: Error, value: T) -> Self {
        Self { error, value }
    }

    /// The reason the value was rejected.
    pub const fn error(&self) -> Error {
        self.error
    }

    /// The rejected value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Takes the rejected value back.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> From<Rejected<T>> for Error {
    fn from(r: Rejected<T>) -> Self {
        r.error
    }
}

// No `T: Debug` bound, so `unwrap()` works for any element type.
impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected").field("error", &self.error).finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> CoreError for Rejected<T> {}
