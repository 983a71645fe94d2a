// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedVec};

impl<T, const N: usize> BoundedVec<T, N> {
    /// Resizes to `new_len`, constructing new elements with `f` when growing.
    ///
    /// - Returns [`Error::Full`] if `new_len > N`; the vector is unchanged.
    /// - Growing constructs `new_len - len` elements front to back.
    /// - Shrinking drops `len - new_len` elements back to front.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if new_len > N {
            trace!("resize rejected: {} exceeds capacity {}", new_len, N);
            return Err(Error::Full);
        }
        if new_len < self.len {
            self.truncate(new_len);
        }
        while self.len < new_len {
            self.write_next(f());
        }
        Ok(())
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Returns [`Error::Full`] if `new_len > N`.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Resizes to `new_len`, filling with `T::default()` when growing.
    ///
    /// Returns [`Error::Full`] if `new_len > N`.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }
}
