//! Sign and ordering queries.
//!
//! The unbounded variants ([`Real::sign`], [`Real::compare`]) refine
//! precision geometrically until the values separate; on exactly equal
//! inputs they never produce an answer. That is a documented property of
//! constructive reals, not a defect; use the `precise_*` variants or an
//! ambient [`with_precision_limit`](crate::with_precision_limit) scope when
//! termination matters.

use std::cmp::Ordering;

use num_bigint::{BigInt, Sign};

use crate::node::Real;
use crate::precision::is_precision_valid;

impl Real {
    /// Sign of the value probed at precision `p`, preferring a nonzero
    /// cached approximation. Returns 0 when the sign cannot be determined
    /// at this precision.
    pub fn precise_sign(&self, p: i64) -> i32 {
        {
            let c = self.cache();
            if c.valid {
                let v = sign_i32(&c.approximation);
                if v != 0 {
                    return v;
                }
            }
        }

        match self.approximate(p - 1) {
            Ok(v) => sign_i32(&v),
            Err(_) => 0,
        }
    }

    /// Sign of the value: 1 when positive, −1 when negative.
    ///
    /// Never terminates when the value is exactly zero; use
    /// [`precise_sign`](Real::precise_sign) instead.
    pub fn sign(&self) -> i32 {
        let mut p = -20i64;
        loop {
            let v = self.precise_sign(p - 1);
            if v != 0 {
                return v;
            }
            p = p.saturating_mul(2);
        }
    }

    /// Compares against `other` at precision `p`: `Less`/`Greater` when the
    /// approximations differ by more than one ulp, `Equal` when the two are
    /// indistinguishable at this precision.
    pub fn precise_cmp(&self, other: &Real, p: i64) -> Ordering {
        let (ia, ib) = match (self.approximate(p - 1), other.approximate(p - 1)) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return Ordering::Equal,
        };

        let one = BigInt::from(1);
        if ia > &ib + &one {
            Ordering::Greater
        } else if ia < &ib - &one {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Compares against `other` at doubling precision until the values
    /// separate, returning `Equal` only when precision runs out.
    ///
    /// Never terminates when the two values are exactly equal; use
    /// [`precise_cmp`](Real::precise_cmp) instead.
    pub fn compare(&self, other: &Real) -> Ordering {
        let mut p = -20i64;
        loop {
            if !is_precision_valid(p) {
                return Ordering::Equal;
            }
            let v = self.precise_cmp(other, p);
            if v != Ordering::Equal {
                return v;
            }
            p = p.saturating_mul(2);
        }
    }
}

fn sign_i32(v: &BigInt) -> i32 {
    match v.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}
