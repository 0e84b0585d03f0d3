//! Per-node memo of the finest approximation computed so far.

use num_bigint::BigInt;

use crate::bigint::scale;

/// A single-entry cache of the last `(precision, approximation)` pair.
///
/// Invariant: when `valid`, the stored approximation at `precision` can be
/// rescaled to answer any query at `p ≥ precision` (coarser) without
/// recomputing. Finer queries bypass the cache; the fresh result then
/// overwrites the entry.
#[derive(Debug, Default)]
pub(crate) struct Tracker {
    pub(crate) valid: bool,
    pub(crate) precision: i64,
    pub(crate) approximation: BigInt,
}

impl Tracker {
    /// Serves `p` from the cache when it is no finer than the stored
    /// precision, rescaling the stored value.
    pub(crate) fn get(&self, p: i64) -> Option<BigInt> {
        if self.valid && p >= self.precision {
            Some(scale(&self.approximation, self.precision - p))
        } else {
            None
        }
    }

    /// Replaces the entry with a freshly computed pair.
    pub(crate) fn set(&mut self, p: i64, v: BigInt) -> BigInt {
        self.valid = true;
        self.precision = p;
        self.approximation = v.clone();
        v
    }
}
