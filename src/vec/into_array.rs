// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{BoundedVec, Error};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> BoundedVec<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns [`Error::InvalidLen`].
    ///
    /// On error the vector is dropped together with its elements.
    pub fn try_into_array(self) -> Result<[T; N], Error> {
        if self.len != N {
            return Err(Error::InvalidLen);
        }

        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the buffer moves
        // into `buf` exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        // SAFETY: `len == N`, so by invariant every slot is initialized.
        Ok(buf.map(|slot| unsafe { slot.assume_init() }))
    }
}
