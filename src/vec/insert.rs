// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, Rejected},
    vec::BoundedVec,
};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Inserts `value` at `index`, shifting elements to the right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// On error the vector is unchanged and `value` comes back inside the
    /// [`Rejected`].
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Rejected<T>> {
        match self.check_insert_at(index) {
            Ok(()) => {
                self.insert_unchecked(index, value);
                Ok(())
            }
            Err(e) => Err(Rejected::new(e, value)),
        }
    }

    /// Constructs the value returned by `f` at `index`, shifting `[index..len)`
    /// one slot toward the back.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len` (this includes any
    ///   position beyond the capacity).
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// `f` runs before anything is moved and is not called on error.
    /// `index == len` behaves like [`emplace_back_with`](Self::emplace_back_with).
    /// Shifted elements are relocated, not cloned or dropped.
    pub fn emplace_with<F>(&mut self, index: usize, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        self.check_insert_at(index)?;
        Ok(self.insert_unchecked(index, f()))
    }

    // Position first, then room.
    fn check_insert_at(&self, index: usize) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            trace!("insert rejected: position {} beyond len {}", index, len);
            return Err(Error::OutOfBounds);
        }
        if len == N {
            trace!("insert rejected: capacity {} exhausted", N);
            return Err(Error::Full);
        }
        Ok(())
    }

    /// Requires `index <= len < N`.
    fn insert_unchecked(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len;
        debug_assert!(index <= len && len < N);
        if index == len {
            return self.write_next(value);
        }
        // SAFETY: `index < len < N`, so `slot` and the range
        // `[index..len]` lie inside the buffer. `ptr::copy` handles the
        // overlap of `[index..len)` and `[index + 1..len + 1)`. After the copy
        // `buf[index]` is a stale bit-copy of the relocated value and is
        // overwritten without being dropped.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
            self.len = len + 1;
            &mut *slot
        }
    }
}
