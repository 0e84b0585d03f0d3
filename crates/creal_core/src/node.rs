//! The expression DAG: node variants, the shared handle, and the closed-form
//! algebra constructors.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use num_bigint::BigInt;

use crate::tracker::Tracker;

/// A constructive real number.
///
/// A `Real` is a cheap-to-clone handle to a node in an immutable expression
/// DAG; subexpressions (notably the process-wide constants) are freely shared
/// between graphs. The node carries a mutable approximation cache behind a
/// mutex, so handles may be used from multiple threads; a race merely lets a
/// coarser approximation overwrite a finer one, which is observationally
/// benign.
#[derive(Clone)]
pub struct Real(pub(crate) Arc<Node>);

pub(crate) struct Node {
    pub(crate) kind: Kind,
    cache: Mutex<Tracker>,
}

/// Structural variants of a node. Children are never mutated after
/// construction.
pub(crate) enum Kind {
    Int(BigInt),
    Add(Real, Real),
    Neg(Real),
    Mul(Real, Real),
    Inv(Real),
    Shift(Real, i64),
    CondSign {
        cond: Real,
        on_neg: Real,
        on_pos: Real,
    },
    /// e^r, assuming |r| ≤ 2.
    PrescaledExp(Real),
    /// ln(1 + r), assuming |r| < 1.
    PrescaledLn(Real),
    /// cos(r), assuming |r| < 2.
    PrescaledCos(Real),
    /// arctan(1/a), assuming |a| ≥ 2.
    IntegralArctan(Real),
    /// √r for r ≥ 0.
    PrescaledSqrt(Real),
    /// A label decorating `inner` for pretty-printing; same value.
    Named(String, Real),
}

impl Real {
    pub(crate) fn new(kind: Kind) -> Real {
        Real(Arc::new(Node {
            kind,
            cache: Mutex::new(Tracker::default()),
        }))
    }

    pub(crate) fn kind(&self) -> &Kind {
        &self.0.kind
    }

    pub(crate) fn cache(&self) -> MutexGuard<'_, Tracker> {
        // A poisoned cache still holds a usable entry; the refinement
        // protocol tolerates whatever state the panicking writer left.
        self.0.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn integer(i: BigInt) -> Real {
        Real::new(Kind::Int(i))
    }

    pub(crate) fn named(name: impl Into<String>, inner: Real) -> Real {
        Real::new(Kind::Named(name.into(), inner))
    }

    pub(crate) fn condsign(cond: Real, on_neg: Real, on_pos: Real) -> Real {
        Real::new(Kind::CondSign {
            cond,
            on_neg,
            on_pos,
        })
    }

    /// Whether two handles refer to the same node.
    pub fn ptr_eq(a: &Real, b: &Real) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// The label of a named constant, if this node carries one.
    pub fn name(&self) -> Option<&str> {
        match self.kind() {
            Kind::Named(name, _) => Some(name),
            _ => None,
        }
    }

    /// `1/self`; undefined when `self` is exactly zero, in which case
    /// approximation fails with a division-by-zero error.
    pub fn inverse(&self) -> Real {
        Real::new(Kind::Inv(self.clone()))
    }

    /// `self · 2^n`.
    pub fn shift_left(&self, n: i64) -> Real {
        Real::new(Kind::Shift(self.clone(), n))
    }

    /// `self · 2^−n`.
    pub fn shift_right(&self, n: i64) -> Real {
        Real::new(Kind::Shift(self.clone(), -n))
    }

    /// `self²`.
    pub fn square(&self) -> Real {
        Real::new(Kind::Mul(self.clone(), self.clone()))
    }

    /// `|self|`.
    pub fn abs(&self) -> Real {
        Real::condsign(self.clone(), -self, self.clone())
    }

    /// The smaller of `self` and `other`.
    pub fn min(&self, other: &Real) -> Real {
        Real::condsign(self - other, self.clone(), other.clone())
    }

    /// The larger of `self` and `other`.
    pub fn max(&self, other: &Real) -> Real {
        Real::condsign(self - other, other.clone(), self.clone())
    }
}
