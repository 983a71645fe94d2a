// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedVec`](crate::BoundedVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements that are never
//!   yielded are dropped with the iterator, back to front.
//! - `&BoundedVec` and `&mut BoundedVec` iterate as slices.

// Crate imports
use crate::vec::BoundedVec;

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by `BoundedVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // `v.len` is 0: the live elements are `v.buf[front..back]` and are owned
    // by the iterator, not by `v`.
    pub(crate) v: BoundedVec<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` holds the live, not yet yielded values.
        unsafe { core::slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front) }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside the live window and has just left it, so
            // the value is read out exactly once.
            Some(unsafe { self.v.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`, the slot at the old `back - 1` leaves the
            // live window before it is read.
            Some(unsafe { self.v.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        while self.front < self.back {
            self.back -= 1;
            // SAFETY: the slot was inside the live window and leaves it
            // before being dropped.
            unsafe { self.v.buf[self.back].assume_init_drop() };
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut BoundedVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for BoundedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}

impl<T, const N: usize> FromIterator<T> for BoundedVec<T, N> {
    /// Takes at most the first `N` elements and leaves the rest of the
    /// iterator unconsumed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
