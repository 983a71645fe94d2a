// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{iter::IntoIter, vec::BoundedVec};

// Core imports
use core::{
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
    ptr,
};

/// Owned iterator returned by `BoundedVec::drain`.
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Internally just wraps an `IntoIter` over a temporary `BoundedVec`
///   the drained elements were relocated into. Elements that are not
///   consumed are dropped with the iterator.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut BoundedVec<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}
impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> BoundedVec<T, N> {
    /// Drains the specified range of elements and returns them as an iterator.
    ///
    /// Elements in `range` are relocated into a temporary `BoundedVec`
    /// and yielded by value. The remainder of the vector is shifted left
    /// immediately.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use bounded_stack_vec::BoundedVec;
    /// let mut v: BoundedVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: BoundedVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => match i.checked_add(1) {
                Some(i) => i,
                None => panic!("drain range start {} exceeds length {}", i, len),
            },
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => match i.checked_add(1) {
                Some(i) => i,
                None => panic!("drain range end {} exceeds length {}", i, len),
            },
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        let range_len = end - start;
        let mut tmp: BoundedVec<T, N> = BoundedVec::new();
        if range_len > 0 {
            self.len = start;
            // SAFETY: `[start..end)` and `[end..len)` are live. The drained
            // range is relocated into the empty `tmp`, then the tail is
            // relocated down over it (`ptr::copy` handles the overlap). Each
            // value ends up owned by exactly one vector.
            unsafe {
                let base = self.as_mut_ptr();
                ptr::copy_nonoverlapping(base.add(start), tmp.as_mut_ptr(), range_len);
                tmp.len = range_len;
                ptr::copy(base.add(end), base.add(start), len - end);
            }
            self.len = len - range_len;
        }

        Drain {
            _parent: self,
            iter: tmp.into_iter(),
        }
    }
}
