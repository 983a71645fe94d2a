// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-based properties: random operation sequences are replayed against
//! `BoundedVec` and against a `Vec` that applies the same capacity rules.

use crate::{
    tracker::{self, Tracked},
    BoundedVec, Error,
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use proptest::prelude::*;

const CAP: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    Push(u16),
    Pop,
    Insert(usize, u16),
    Erase(usize),
    Resize(usize, u16),
    Truncate(usize),
    Clear,
    RetainBelow(u16),
    DrainFront(usize),
}

fn op() -> impl Strategy<Value = Op> {
    // Positions run a little past the capacity so rejections are exercised.
    let pos = 0..CAP + 3;
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        3 => (pos.clone(), any::<u16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => pos.clone().prop_map(Op::Erase),
        1 => (pos.clone(), any::<u16>()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => pos.clone().prop_map(Op::Truncate),
        1 => Just(Op::Clear),
        1 => any::<u16>().prop_map(Op::RetainBelow),
        1 => pos.prop_map(Op::DrainFront),
    ]
}

/// Applies `op` to the model with the same capacity rules as `BoundedVec<_, CAP>`.
fn apply_model(model: &mut Vec<String>, op: &Op) -> Result<(), Error> {
    match *op {
        Op::Push(v) => {
            if model.len() == CAP {
                return Err(Error::Full);
            }
            model.push(v.to_string());
        }
        Op::Pop => {
            model.pop();
        }
        Op::Insert(i, v) => {
            if i > model.len() {
                return Err(Error::OutOfBounds);
            }
            if model.len() == CAP {
                return Err(Error::Full);
            }
            model.insert(i, v.to_string());
        }
        Op::Erase(i) => {
            if i >= model.len() {
                return Err(Error::OutOfBounds);
            }
            model.remove(i);
        }
        Op::Resize(n, v) => {
            if n > CAP {
                return Err(Error::Full);
            }
            model.resize(n, v.to_string());
        }
        Op::Truncate(n) => model.truncate(n),
        Op::Clear => model.clear(),
        Op::RetainBelow(limit) => model.retain(|s| s.parse::<u16>().map_or(false, |x| x < limit)),
        Op::DrainFront(n) => {
            let n = n.min(model.len());
            model.drain(..n);
        }
    }
    Ok(())
}

fn apply_vec(v: &mut BoundedVec<String, CAP>, op: &Op) -> Result<(), Error> {
    match *op {
        Op::Push(x) => v.push(x.to_string()).map_err(Error::from),
        Op::Pop => {
            v.pop();
            Ok(())
        }
        Op::Insert(i, x) => v.insert(i, x.to_string()).map_err(Error::from),
        Op::Erase(i) => v.erase(i),
        Op::Resize(n, x) => v.resize(n, &x.to_string()),
        Op::Truncate(n) => {
            v.truncate(n);
            Ok(())
        }
        Op::Clear => {
            v.clear();
            Ok(())
        }
        Op::RetainBelow(limit) => {
            v.retain(|s| s.parse::<u16>().map_or(false, |x| x < limit));
            Ok(())
        }
        Op::DrainFront(n) => {
            let n = n.min(v.len());
            v.drain(..n).for_each(drop);
            Ok(())
        }
    }
}

fn apply_tracked(v: &mut BoundedVec<Tracked, CAP>, op: &Op) {
    match *op {
        Op::Push(x) => {
            let _ = v.push(Tracked::new(x.into()));
        }
        Op::Pop => {
            v.pop();
        }
        Op::Insert(i, x) => {
            let _ = v.insert(i, Tracked::new(x.into()));
        }
        Op::Erase(i) => {
            let _ = v.erase(i);
        }
        Op::Resize(n, x) => {
            let _ = v.resize(n, &Tracked::new(x.into()));
        }
        Op::Truncate(n) => v.truncate(n),
        Op::Clear => v.clear(),
        Op::RetainBelow(limit) => v.retain(|t| t.value < u64::from(limit)),
        Op::DrainFront(n) => {
            let n = n.min(v.len());
            // Leave the drained elements unconsumed; the iterator drops them.
            let _ = v.drain(..n);
        }
    }
}

proptest! {
    /// Every operation agrees with the model on both the result and the contents.
    #[test]
    fn ops_match_vec_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut model: Vec<String> = Vec::new();
        let mut v: BoundedVec<String, CAP> = BoundedVec::new();

        for op in &ops {
            let expected = apply_model(&mut model, op);
            let got = apply_vec(&mut v, op);
            prop_assert_eq!(got, expected, "op {:?}", op);
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert!(v.len() <= CAP);
            prop_assert_eq!(v.len() + v.spare_capacity(), CAP);
        }
    }

    /// Every constructed element is dropped exactly once, whatever the sequence.
    #[test]
    fn constructions_balance_drops(ops in prop::collection::vec(op(), 0..64)) {
        tracker::reset();
        {
            let mut v: BoundedVec<Tracked, CAP> = BoundedVec::new();
            for op in &ops {
                apply_tracked(&mut v, op);
            }
        }
        let s = tracker::stats();
        prop_assert_eq!(s.custom_ctor + s.default_ctor + s.clone, s.drop);
    }

    /// Truncation destroys the removed tail from the back to the front.
    #[test]
    fn truncate_drops_descending(len in 0..=CAP, keep in 0..=CAP) {
        let mut v: BoundedVec<Tracked, CAP> = (0..len as u64).map(Tracked::new).collect();
        tracker::reset();
        v.truncate(keep);
        let expected: Vec<u64> = (keep.min(len) as u64..len as u64).rev().collect();
        prop_assert_eq!(tracker::stats().drop_order, expected);
    }

    /// Clones of any length compare equal to their source across capacities.
    #[test]
    fn clone_and_cross_capacity_equality(values in prop::collection::vec(any::<u16>(), 0..=CAP)) {
        let strings: Vec<String> = values.iter().map(|x| x.to_string()).collect();
        let v: BoundedVec<String, CAP> = BoundedVec::try_from(strings.as_slice()).unwrap();
        let mut wide: BoundedVec<String, { CAP * 2 }> = BoundedVec::new();
        wide.extend_from_slice(&strings).unwrap();

        prop_assert_eq!(&v.clone(), &v);
        prop_assert!(v == wide);
        prop_assert!(wide == v);
    }
}
