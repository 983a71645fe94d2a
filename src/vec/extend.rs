// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedVec};

impl<T, const N: usize> Extend<T> for BoundedVec<T, N> {
    /// Appends at most `spare_capacity()` items and leaves the rest of the
    /// iterator unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            self.write_next(item);
        }
    }
}

impl<T, const N: usize> BoundedVec<T, N> {
    /// Clones all of `src` onto the end if it fits; otherwise no-op and returns [`Error::Full`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > N - self.len {
            trace!("extend rejected: {} elements exceed spare capacity {}", src.len(), N - self.len);
            return Err(Error::Full);
        }
        for item in src {
            self.write_next(item.clone());
        }
        Ok(())
    }

    /// Clones as many elements from `src` as will fit and returns the count copied.
    #[inline]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = (N - self.len).min(src.len());
        for item in &src[..take] {
            self.write_next(item.clone());
        }
        take
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// Semantics:
    /// - All-or-nothing:
    ///   - If the iterator yields at most `spare_capacity()` items, they are
    ///     appended in order and `Ok(())` is returned.
    ///   - If it yields more than `spare_capacity()`, this returns
    ///     `Err(Error::Full)` and `self` is left unchanged. Items already
    ///     taken from the iterator are dropped.
    /// - The source iterator may be partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let spare = N - self.len;

        // Staging buffer so `self` is unchanged on error.
        let mut tmp: BoundedVec<T, N> = BoundedVec::new();
        for item in iter {
            if tmp.len() == spare {
                return Err(Error::Full);
            }
            tmp.push(item)?;
        }

        for item in tmp {
            self.write_next(item);
        }
        Ok(())
    }
}
