// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifetime instrumentation for tests.
//!
//! [`Tracked`] counts every construction, clone, `clone_from` and drop that
//! happens on the current thread, and records the value of each dropped
//! instance in drop order. Each test runs on its own thread, so counters from
//! concurrently running tests never mix.

use std::{cell::RefCell, vec::Vec};

/// Per-thread lifetime statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Stats {
    /// `Tracked::new`
    pub custom_ctor: usize,
    /// `Default::default`
    pub default_ctor: usize,
    /// `Clone::clone`
    pub clone: usize,
    /// `Clone::clone_from`
    pub clone_from: usize,
    pub drop: usize,
    /// Values of dropped instances, in drop order.
    pub drop_order: Vec<u64>,
}

std::thread_local! {
    static STATS: RefCell<Stats> = RefCell::new(Stats::default());
}

/// Clears the statistics of the current thread.
pub(crate) fn reset() {
    STATS.with(|s| *s.borrow_mut() = Stats::default());
}

/// Snapshot of the statistics of the current thread.
pub(crate) fn stats() -> Stats {
    STATS.with(|s| s.borrow().clone())
}

fn record(f: impl FnOnce(&mut Stats)) {
    STATS.with(|s| f(&mut s.borrow_mut()));
}

/// An element type whose lifecycle events are counted.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Tracked {
    pub value: u64,
}

impl Tracked {
    pub(crate) fn new(value: u64) -> Self {
        record(|s| s.custom_ctor += 1);
        Self { value }
    }
}

impl Default for Tracked {
    fn default() -> Self {
        record(|s| s.default_ctor += 1);
        Self { value: 0 }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        record(|s| s.clone += 1);
        Self { value: self.value }
    }

    fn clone_from(&mut self, source: &Self) {
        record(|s| s.clone_from += 1);
        self.value = source.value;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let value = self.value;
        record(|s| {
            s.drop += 1;
            s.drop_order.push(value);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{reset, stats, Tracked};

    #[test]
    fn test_counters_follow_lifecycle() {
        reset();
        let a = Tracked::new(7);
        let mut b = a.clone();
        b.clone_from(&Tracked::default());
        drop(a);
        drop(b);

        let s = stats();
        assert_eq!(s.custom_ctor, 1);
        assert_eq!(s.default_ctor, 1);
        assert_eq!(s.clone, 1);
        assert_eq!(s.clone_from, 1);
        // default temporary, then `a`, then `b` (holding 0 after clone_from)
        assert_eq!(s.drop, 3);
        assert_eq!(s.drop_order, [0, 7, 0]);
    }
}
