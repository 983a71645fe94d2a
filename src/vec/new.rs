// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Constructs an empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a vector holding `min(count, N)` default-constructed elements.
    ///
    /// Requesting more than `N` elements is not an error; the count is clamped.
    pub fn with_default(count: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::new();
        for _ in 0..count.min(N) {
            v.write_next(T::default());
        }
        v
    }

    /// Constructs a vector holding `min(count, N)` clones of `value`.
    ///
    /// Requesting more than `N` elements is not an error; the count is clamped.
    pub fn from_elem(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        for _ in 0..count.min(N) {
            v.write_next(value.clone());
        }
        v
    }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    /// Same as [`BoundedVec::new`].
    fn default() -> Self {
        Self::new()
    }
}
