// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fatal violation reporting.
//!
//! Precondition breaches on element access (`at`, `[]`, `front`, `back`) are
//! programmer errors, not capacity conditions. They are reported here as an
//! *enforce violation* and never return. With the `log` feature the violation
//! is also emitted through `log::error!` before the panic unwinds or aborts.

/// Emits a `log::trace!` record when the `log` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)*);
        }
        #[cfg(not(feature = "log"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Message prefix shared by every fatal violation.
pub(crate) const ENFORCE_VIOLATION: &str = "enforce violation";

/// Reports an out-of-range access of `index` into a live range of `len`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn out_of_bounds(index: usize, len: usize) -> ! {
    #[cfg(feature = "log")]
    log::error!("{ENFORCE_VIOLATION}: index {index} out of bounds (len {len})");
    panic!("{ENFORCE_VIOLATION}: index {index} out of bounds (len {len})")
}

/// Reports `op` being called on an empty vector.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn empty_access(op: &str) -> ! {
    #[cfg(feature = "log")]
    log::error!("{ENFORCE_VIOLATION}: {op}() on empty vector");
    panic!("{ENFORCE_VIOLATION}: {op}() on empty vector")
}

/// Checks `index < len`, reporting a fatal violation otherwise.
#[inline]
#[track_caller]
pub(crate) fn enforce_in_bounds(index: usize, len: usize) {
    if index >= len {
        out_of_bounds(index, len);
    }
}

/// Checks `len > 0`, reporting a fatal violation for `op` otherwise.
#[inline]
#[track_caller]
pub(crate) fn enforce_non_empty(len: usize, op: &str) {
    if len == 0 {
        empty_access(op);
    }
}
