// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`BoundedVec`](crate::BoundedVec).
//!
//! - `v[i]` goes through [`BoundedVec::at`](crate::BoundedVec::at): an index
//!   outside `[0..len)` is an enforce violation.
//! - Range forms mirror slice behavior (panic on out-of-bounds or inverted
//!   ranges) and view only the initialized prefix `[0..len)`.

// Crate imports
use crate::vec::BoundedVec;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T, const N: usize> Index<usize> for BoundedVec<T, N> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &Self::Output {
        self.at(i)
    }
}

impl<T, const N: usize> IndexMut<usize> for BoundedVec<T, N> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        self.at_mut(i)
    }
}

// Range forms view the live prefix only, with slice panic semantics.
macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {$(
        impl<T, const N: usize> Index<$range> for BoundedVec<T, N> {
            type Output = [T];
            fn index(&self, r: $range) -> &[T] {
                &self.as_slice()[r]
            }
        }
        impl<T, const N: usize> IndexMut<$range> for BoundedVec<T, N> {
            fn index_mut(&mut self, r: $range) -> &mut [T] {
                &mut self.as_mut_slice()[r]
            }
        }
    )*};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);
