// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::BoundedVec;

impl<T, const N: usize> BoundedVec<T, N> {
    /// Tries to construct from an iterator, erroring with [`Error::Full`](crate::Error::Full) if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns `Err(Error::Full)`.
    /// - Any elements pushed before the overflow are dropped; the returned `Err` does *not*
    ///   include the partially filled vector.
    /// - The source iterator may be left partially consumed (it stops at the first overflow).
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, crate::Error> {
        let mut v = Self::new();
        for item in iter {
            v.push(item)?;
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::BoundedVec;

    // NOTE: NoDefault does NOT implement Default or Clone on purpose.
    #[derive(PartialEq, Eq, Debug)]
    struct NoDefault(u8);

    #[test]
    fn test_try_from_iter_non_default_type() {
        let v: BoundedVec<NoDefault, 4> =
            BoundedVec::try_from_iter((1..=3).map(NoDefault)).expect("should not overflow");
        assert_eq!(v.len(), 3);
        assert_eq!(v, [NoDefault(1), NoDefault(2), NoDefault(3)]);

        let err = BoundedVec::<NoDefault, 3>::try_from_iter((1..=5).map(NoDefault)).unwrap_err();
        assert_eq!(err, crate::Error::Full);
    }

    #[test]
    fn test_collect_non_default_type() {
        let v: BoundedVec<NoDefault, 4> = (1..=3).map(NoDefault).collect();
        assert_eq!(v.len(), 3);
        assert_eq!(v, [NoDefault(1), NoDefault(2), NoDefault(3)]);
    }
}
