// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::BoundedVec};

// Core imports
use core::ptr;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Destroys the element at `index` and shifts the following elements one
    /// slot toward the front, preserving their order.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`; this covers the end
    /// position, a position before the start (wrapped to `usize::MAX`), and
    /// anything past the live range. On error the vector is unchanged.
    pub fn erase(&mut self, index: usize) -> Result<(), Error> {
        let len = self.len;
        if index >= len {
            trace!("erase rejected: position {} outside len {}", index, len);
            return Err(Error::OutOfBounds);
        }

        // Hide the slot and the tail while the destructor runs; a panic
        // leaks the tail instead of dropping anything twice.
        self.len = index;
        // SAFETY: `index < len`, so `slot` is live and is dropped exactly once.
        // The tail `[index + 1..len)` is live and is relocated over it;
        // `ptr::copy` handles the overlap. The stale bit-copy left at
        // `len - 1` falls outside the new live range.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            ptr::drop_in_place(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
        }
        self.len = len - 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        // SAFETY: `index < len`, so `buf[index]` is live; it is read out once
        // and then overwritten by the relocated tail `[index + 1..len)`.
        let out = unsafe {
            let slot = self.as_mut_ptr().add(index);
            let out = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
            out
        };
        self.len = len - 1;
        Some(out)
    }

    /// Removes and returns the element at `index` by moving the last element into its place.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`. Removing
    /// the last element avoids the move.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;
        // SAFETY: Before decrement, `index < old_len` and `last == old_len - 1`,
        // so both slots are live. `buf[index]` is read out once, then the
        // value at `last` is relocated into it when the two differ.
        let out = unsafe {
            let base = self.as_mut_ptr();
            let out = ptr::read(base.add(index));
            if index != last {
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            out
        };
        Some(out)
    }

    /// Fallible variant of [`remove`](Self::remove), returning [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Fallible variant of [`swap_remove`](Self::swap_remove), returning [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfBounds)
    }
}
