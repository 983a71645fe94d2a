// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{BoundedVec, Error};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`, relocated
    ///   without cloning.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfBounds);
        }

        let tail_len = len - at;
        let mut other: BoundedVec<T, N> = BoundedVec::new();
        self.len = at;
        // SAFETY: `[at..len)` was live in `self` and is now outside its live
        // range; it is relocated into the empty, non-overlapping `other`,
        // which takes ownership by setting its length.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr().add(at), other.as_mut_ptr(), tail_len);
        }
        other.len = tail_len;

        Ok(other)
    }
}
