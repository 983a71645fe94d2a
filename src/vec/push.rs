// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, Rejected},
    vec::BoundedVec,
};

impl<T, const N: usize> BoundedVec<T, N> {
    /// Pushes `v` if not full.
    ///
    /// When full, no slot is touched and `v` comes back inside the
    /// [`Rejected`] with [`Error::Full`].
    #[inline]
    pub fn push(&mut self, v: T) -> Result<(), Rejected<T>> {
        if self.len == N {
            trace!("push rejected: capacity {} exhausted", N);
            return Err(Rejected::new(Error::Full, v));
        }
        self.write_next(v);
        Ok(())
    }

    /// Constructs the value returned by `f` in place at the end.
    ///
    /// `f` is only called when a free slot exists; on [`Error::Full`] it is
    /// never invoked.
    #[inline]
    pub fn emplace_back_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            trace!("emplace_back rejected: capacity {} exhausted", N);
            return Err(Error::Full);
        }
        Ok(self.write_next(f()))
    }

    /// Pushes `v` if not full; if at capacity, drops `v` and returns `false`.
    #[inline]
    #[must_use]
    pub fn push_truncated(&mut self, v: T) -> bool {
        self.push(v).is_ok()
    }
}
