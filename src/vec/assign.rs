// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedVec};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Shared shape of copy and move assignment.
    ///
    /// - `assign(i, dst)` overwrites the live destination slot `i`, for
    ///   `i < min(len, src_len)`.
    /// - `construct(i)` produces the value for the fresh slot `i`, for
    ///   `len <= i < src_len`.
    /// - Destination elements at `src_len..len` are dropped back to front.
    ///
    /// Requires `src_len <= N`.
    pub(crate) fn assign_with<A, C>(&mut self, src_len: usize, mut assign: A, mut construct: C)
    where
        A: FnMut(usize, &mut T),
        C: FnMut(usize) -> T,
    {
        debug_assert!(src_len <= N);
        let overlap = self.len.min(src_len);
        for (i, dst) in self.as_mut_slice()[..overlap].iter_mut().enumerate() {
            assign(i, dst);
        }
        if src_len > overlap {
            for i in overlap..src_len {
                self.write_next(construct(i));
            }
        } else {
            self.truncate(src_len);
        }
    }

    /// Copy-assigns the contents of `src`, which may come from a vector of
    /// any capacity.
    ///
    /// Overlapping elements are reassigned with [`Clone::clone_from`], surplus
    /// source elements are cloned into fresh slots front to back, and surplus
    /// destination elements are dropped back to front. `src` is untouched.
    ///
    /// Returns [`Error::Full`] if `src.len() > N`; the vector is unchanged.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > N {
            trace!("assign rejected: {} elements exceed capacity {}", src.len(), N);
            return Err(Error::Full);
        }
        self.assign_with(src.len(), |i, dst| dst.clone_from(&src[i]), |i| src[i].clone());
        Ok(())
    }

    /// Move-assigns the contents of `source`, which may have any capacity,
    /// and leaves `source` empty.
    ///
    /// Each overlapping destination element is dropped and replaced by the
    /// source element relocated into its slot. Surplus source elements are
    /// relocated into fresh slots front to back, and surplus destination
    /// elements are dropped back to front. Nothing is cloned.
    ///
    /// Returns [`Error::Full`] if `source.len() > N`; neither vector changes.
    ///
    /// For vectors of the same capacity a plain `dst = src` has the same
    /// result; `move_from` additionally reuses the destination in place and
    /// keeps `source` usable.
    pub fn move_from<const M: usize>(&mut self, source: &mut BoundedVec<T, M>) -> Result<(), Error> {
        let src_len = source.len;
        if src_len > N {
            trace!("move rejected: {} elements exceed capacity {}", src_len, N);
            return Err(Error::Full);
        }
        // The source gives up its live range before any slot is read, so no
        // source value can be dropped by `source` after it was moved out.
        source.len = 0;
        let src = source.as_ptr();
        self.assign_with(
            src_len,
            // SAFETY: `i < src_len`, and every source slot below `src_len` was
            // live and is read exactly once across both closures.
            |i, dst| *dst = unsafe { ptr::read(src.add(i)) },
            // SAFETY: as above.
            |i| unsafe { ptr::read(src.add(i)) },
        );
        Ok(())
    }
}
