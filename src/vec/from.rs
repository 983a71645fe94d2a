// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::BoundedVec;

impl<T, const N: usize> From<[T; N]> for BoundedVec<T, N> {
    fn from(src: [T; N]) -> Self {
        let mut v = Self::new();
        for item in src {
            v.write_next(item);
        }
        v
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for BoundedVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        Self::from_slice_truncated(&src[..])
    }
}
