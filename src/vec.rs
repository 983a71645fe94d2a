// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedVec` type and its inherent API.
//!
//! `BoundedVec<T, N>` is a fixed-capacity vector for any element type. It
//! stores elements inline in `[MaybeUninit<T>; N]` and tracks a logical length.
//! Methods generally mirror slice/vector semantics, with explicit capacity
//! checks and fallible variants where appropriate.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds.
// - Slots in `buf[..len]` hold live `T` values.
// - Slots in `buf[len..N]` are uninitialized and must never be read as `T`.
// - Every live slot is dropped exactly once: by `pop`/`erase`/`truncate`/
//   `clear`/`resize`/assignment, or by `Drop`. Bulk destruction runs in
//   descending index order.
// - Slots are relocated bitwise; a slot whose value was relocated away is
//   treated as uninitialized and is not dropped.

mod as_ptr;
mod assign;
mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod split_off;
mod try_from;
mod try_from_iter;

pub use drain::Drain;

// Crate imports
use crate::violation;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector with inline storage.
///
/// `BoundedVec<T, N>` stores up to `N` elements inline (typically on the
/// stack) and tracks a logical length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - no heap allocations are performed, ever;
/// - any `T` is accepted: elements are constructed into and dropped out of
///   their slots individually, so destructors run exactly once;
/// - many methods mirror `Vec`/slice semantics where they make sense.
///
/// # Two failure channels
///
/// - **Capacity and position conditions** (the vector is full, an edit
///   position is outside the live range) are routine. They are reported as
///   [`crate::Error`] and leave the vector unchanged; `push` and `insert`
///   wrap it in a [`crate::Rejected`] that hands the element back:
///   [`push`](BoundedVec::push), [`emplace_back_with`](BoundedVec::emplace_back_with),
///   [`insert`](BoundedVec::insert), [`emplace_with`](BoundedVec::emplace_with),
///   [`erase`](BoundedVec::erase), [`resize`](BoundedVec::resize),
///   [`assign_from_slice`](BoundedVec::assign_from_slice),
///   [`move_from`](BoundedVec::move_from).
/// - **Element access preconditions** ([`at`](BoundedVec::at), `v[i]`,
///   [`front`](BoundedVec::front), [`back`](BoundedVec::back)) are programmer
///   errors. An out-of-range index is an *enforce violation*: it panics with a
///   message starting with `"enforce violation"` and does not return.
///
/// # Destruction order
///
/// [`clear`](BoundedVec::clear), [`truncate`](BoundedVec::truncate),
/// shrinking [`resize`](BoundedVec::resize) and `Drop` destroy elements from
/// the back to the front, last-constructed first.
///
/// # Examples
///
/// ```rust
/// use bounded_stack_vec::BoundedVec;
///
/// let mut v: BoundedVec<String, 3> = BoundedVec::new();
/// v.push("a".to_string()).unwrap();
/// v.push("c".to_string()).unwrap();
/// v.insert(1, "b".to_string()).unwrap();
/// assert_eq!(v, ["a", "b", "c"]);
/// assert!(v.push("d".to_string()).is_err());
/// ```
pub struct BoundedVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> BoundedVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Reports an enforce violation if `index >= len`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        violation::enforce_in_bounds(index, self.len);
        &self.as_slice()[index]
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Panics
    ///
    /// Reports an enforce violation if `index >= len`.
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        violation::enforce_in_bounds(index, self.len);
        &mut self.as_mut_slice()[index]
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Reports an enforce violation if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        violation::enforce_non_empty(self.len, "front");
        &self.as_slice()[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Reports an enforce violation if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        violation::enforce_non_empty(self.len, "front_mut");
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Reports an enforce violation if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        violation::enforce_non_empty(self.len, "back");
        &self.as_slice()[self.len - 1]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Reports an enforce violation if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        violation::enforce_non_empty(self.len, "back_mut");
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live range).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Destroys every element, from the back to the front, and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Removed elements are dropped in descending index order.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: the slot at the old `len - 1` was live. `len` is
            // decremented first, so a panicking destructor cannot cause the
            // slot to be dropped again.
            unsafe { self.buf[self.len].assume_init_drop() };
        }
    }

    /// Constructs `value` in the first free slot and returns a reference to it.
    ///
    /// Callers must have checked `len < N`.
    #[inline]
    pub(crate) fn write_next(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N);
        let slot = self.len;
        self.len = slot + 1;
        self.buf[slot].write(value)
    }
}

impl<T, const N: usize> Drop for BoundedVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Equality compares the live ranges only; capacity takes no part.
impl<T, U, const N: usize, const M: usize> PartialEq<BoundedVec<U, M>> for BoundedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &BoundedVec<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T, U, const N: usize> PartialEq<[U]> for BoundedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize> PartialEq<&[U]> for BoundedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T, U, const N: usize, const K: usize> PartialEq<[U; K]> for BoundedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; K]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T: Eq, const N: usize> Eq for BoundedVec<T, N> {}
impl<T: Ord, const N: usize> Ord for BoundedVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for BoundedVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for BoundedVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone, const N: usize> Clone for BoundedVec<T, N> {
    /// Clones every live element, front to back, into a fresh vector.
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self.as_slice() {
            out.write_next(item.clone());
        }
        out
    }

    /// Copy assignment: overlapping slots are reassigned with
    /// [`Clone::clone_from`], surplus source elements are cloned into fresh
    /// slots and surplus destination elements are dropped back to front.
    fn clone_from(&mut self, source: &Self) {
        let src = source.as_slice();
        self.assign_with(
            src.len(),
            |i, dst| dst.clone_from(&src[i]),
            |i| src[i].clone(),
        );
    }
}

impl<T, const N: usize> Deref for BoundedVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for BoundedVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for BoundedVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for BoundedVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for BoundedVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
