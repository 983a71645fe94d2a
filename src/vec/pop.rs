// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedVec;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// Discarding the returned value destroys the element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[self.len]` (the old last slot)
            // still contains an initialized `T`. The slot is now outside the
            // live range and is never read again.
            let out = unsafe { self.buf[self.len].assume_init_read() };
            Some(out)
        }
    }
}
