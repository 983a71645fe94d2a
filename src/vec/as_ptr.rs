// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedVec;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are live. Code that dereferences this
    /// pointer must:
    ///
    /// - treat `self.len` as the number of initialized elements, and
    /// - avoid reading from `ptr.add(i)` for any `i >= self.len`.
    ///
    /// The pointer is invalidated by any structural mutation of the vector.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are live. Code that dereferences this
    /// pointer must:
    ///
    /// - treat `self.len` as the number of initialized elements, and
    /// - avoid reading from `ptr.add(i)` for any `i >= self.len`.
    ///
    /// Writing past `len` does **not** update `len`, and such values are
    /// neither visible through the vector nor dropped by it.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }
}
