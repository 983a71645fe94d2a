// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-stack-vec`
//!
//! A `no_std`, fixed-capacity, inline vector for **any** element type.
//!
//! The core type, [`BoundedVec<T, N>`], stores up to `N` elements inline and
//! tracks a logical length `len ∈ 0..=N`. Elements are constructed into and
//! destroyed out of their slots individually, so non-`Copy` types with
//! destructors are handled exactly: every constructed element is dropped
//! exactly once, and slots beyond `len` are never touched.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know capacities at compile time.
//! - You want predictable, allocation-free behavior and can work with a fixed
//!   maximum length, but your elements own resources (strings, handles,
//!   guards) and cannot be `Copy`.
//!
//! It may not be the best fit if you need very large capacities or you
//! frequently move vectors by value (moving a `BoundedVec` relocates the
//! whole `N`-slot buffer).
//!
//! ## Failure channels
//!
//! - **Capacity and position conditions** return [`Error`] and leave the
//!   vector unchanged: [`Error::Full`] when an insertion would exceed `N`,
//!   [`Error::OutOfBounds`] when an edit position lies outside the live range.
//!   [`BoundedVec::push`] and [`BoundedVec::insert`] wrap the error in a
//!   [`Rejected`] that hands the element back.
//! - **Truncating** variants silently stop at capacity
//!   ([`BoundedVec::push_truncated`], [`BoundedVec::extend_from_slice_truncated`],
//!   [`BoundedVec::from_slice_truncated`], [`FromIterator<T>`], [`Extend<T>`]).
//! - **Element access preconditions** ([`BoundedVec::at`], `v[i]`,
//!   [`BoundedVec::front`], [`BoundedVec::back`]) are enforced: a violation
//!   panics with a message starting with `"enforce violation"`.
//!
//! Range indexing (`v[a..b]`) and [`BoundedVec::drain`] follow slice and
//! `Vec` semantics and panic on out-of-bounds or inverted ranges.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `BoundedVec<T, N>` as a
//!   sequence of at most `N` elements.
//! - `log`: enforce violations are emitted through `log::error!` before the
//!   panic, and capacity rejections through `log::trace!`.
//!
//! Both features are off by default. Their tests live next to the code they
//! cover and only build when the feature is enabled, so run
//! `cargo test --all-features` to cover every path.
//!
//! ## Example
//!
//! ```rust
//! use bounded_stack_vec::{BoundedVec, Error};
//!
//! let mut v: BoundedVec<String, 2> = BoundedVec::new();
//! v.push("first".into()).unwrap();
//! v.emplace_back_with(|| "second".into()).unwrap();
//! let rejected = v.push("third".into()).unwrap_err();
//! assert_eq!(rejected.error(), Error::Full);
//! assert_eq!(rejected.into_value(), "third");
//! assert_eq!(v.back(), "second");
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
#[macro_use]
mod violation;
mod error;
mod index;
mod iter;
#[cfg(test)]
mod proptests;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod tracker;
mod vec;

// Public exports (crate API surface)
pub use error::{Error, Rejected};
pub use iter::IntoIter;
pub use vec::{BoundedVec, Drain};
