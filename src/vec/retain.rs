// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::BoundedVec;

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order. Rejected
    /// elements are dropped as they are visited.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        // Nothing is visible to `Drop` while slots are being compacted; a
        // panicking predicate or destructor leaks instead of double-dropping.
        self.len = 0;
        let base = self.as_mut_ptr();
        let mut write = 0;
        for read in 0..len {
            // SAFETY: `read < len`, so the slot still holds the live value it
            // had on entry. Kept values are relocated down to `write <= read`,
            // rejected values are dropped in place; each slot is handled once.
            unsafe {
                let cur = base.add(read);
                if f(&*cur) {
                    if write != read {
                        ptr::copy_nonoverlapping(cur, base.add(write), 1);
                    }
                    write += 1;
                } else {
                    ptr::drop_in_place(cur);
                }
            }
        }
        self.len = write;
    }
}
