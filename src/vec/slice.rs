// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedVec;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Returns the live range `[0..len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live range `[0..len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`. We have exclusive access via `&mut self`, so it is
        // sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Clones at most `N` elements of `src` into a new vector, truncating if necessary.
    ///
    /// Any `BoundedVec` dereferences to a slice, so this also copies between
    /// vectors of different capacities.
    #[inline]
    pub fn from_slice_truncated(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        let _ = v.extend_from_slice_truncated(src);
        v
    }

    /// Clones at most `N` elements of `src`, truncating if necessary.
    ///
    /// Convenience wrapper over [`from_slice_truncated`](Self::from_slice_truncated) for arrays.
    #[inline]
    pub fn from_array_truncated<const M: usize>(src: &[T; M]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_truncated(&src[..])
    }
}
