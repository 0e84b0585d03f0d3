//! The approximation driver: the caching gatekeeper, the per-variant
//! precision arithmetic, and most-significant-digit probing.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::bigint::scale;
use crate::error::RealError;
use crate::node::{Kind, Real};
use crate::precision::{check_precision_overflow, is_precision_valid};
use crate::series;

impl Real {
    /// Computes an integer `a` with `|a·2^p − x| < 1` for this node's exact
    /// value `x`. More-negative `p` is finer; `p = 0` is integer accuracy.
    ///
    /// All recursion funnels through here: the precision is validated, the
    /// ambient limit consulted, and the node's cache checked before any
    /// work is dispatched. A fresh result overwrites the cache.
    pub fn approximate(&self, p: i64) -> Result<BigInt, RealError> {
        if !is_precision_valid(p) {
            return Err(RealError::InvalidPrecision(p));
        }
        check_precision_overflow(p)?;

        if let Some(v) = self.cache().get(p) {
            return Ok(v);
        }

        let v = compute(self, p)?;
        Ok(self.cache().set(p, v))
    }
}

fn compute(real: &Real, p: i64) -> Result<BigInt, RealError> {
    match real.kind() {
        Kind::Int(i) => Ok(scale(i, -p)),
        Kind::Add(a, b) => {
            // two guard bits absorb the children's rounding errors
            let sum = a.approximate(p - 2)? + b.approximate(p - 2)?;
            Ok(scale(&sum, -2))
        }
        Kind::Neg(r) => Ok(-r.approximate(p)?),
        Kind::Shift(r, n) => r.approximate(p - n),
        Kind::Mul(a, b) => approximate_mul(a, b, p),
        Kind::Inv(r) => approximate_inverse(r, p),
        Kind::CondSign {
            cond,
            on_neg,
            on_pos,
        } => approximate_condsign(cond, on_neg, on_pos, p),
        Kind::PrescaledExp(r) => series::exp(r, p),
        Kind::PrescaledLn(r) => series::ln1p(r, p),
        Kind::PrescaledCos(r) => series::cos(r, p),
        Kind::IntegralArctan(a) => series::arctan_inverse(a, p),
        Kind::PrescaledSqrt(r) => series::sqrt(real, r, p),
        Kind::Named(_, inner) => inner.approximate(p),
    }
}

/// MSD position read off the cache: when the result is `m`,
/// `2^(m−1) ≤ |x| ≤ 2^(m+1)`. Only meaningful after [`msd`] returned
/// `Some` or an approximation left a usable entry.
pub(crate) fn known_msd(x: &Real) -> i64 {
    let c = x.cache();
    c.precision + c.approximation.bits() as i64 - 1
}

/// MSD of `x`, forcing a probe at precision `n − 1` when the cache holds
/// nothing usable. `None` means `x` is indistinguishable from zero at that
/// precision; callers treat the operand as effectively zero.
pub(crate) fn msd(x: &Real, n: i64) -> Result<Option<i64>, RealError> {
    let needs_probe = {
        let c = x.cache();
        !c.valid || c.approximation.bits() <= 1
    };
    if needs_probe {
        x.approximate(n - 1)?;
        if x.cache().approximation.bits() <= 1 {
            return Ok(None);
        }
    }
    Ok(Some(known_msd(x)))
}

fn approximate_mul(a: &Real, b: &Real, p: i64) -> Result<BigInt, RealError> {
    let hp = (p >> 1) - 1;

    // Find one operand with a known magnitude; if both sit below 2^hp the
    // product is far under the requested precision.
    let (a, b, ma) = match msd(a, hp)? {
        Some(m) => (a, b, m),
        None => match msd(b, hp)? {
            Some(m) => (b, a, m),
            None => return Ok(BigInt::zero()),
        },
    };

    let p2 = p - ma - 3;
    let ib = b.approximate(p2)?;
    if ib.is_zero() {
        return Ok(BigInt::zero());
    }

    let mb = known_msd(b);
    let p1 = p - mb - 3;
    let ia = a.approximate(p1)?;

    Ok(scale(&(ia * ib), p1 + p2 - p))
}

fn approximate_inverse(r: &Real, p: i64) -> Result<BigInt, RealError> {
    // An operand indistinguishable from zero behaves as msd 0 in the
    // precision bookkeeping; a truly zero divisor is caught below.
    let mr = msd(r, p)?.unwrap_or(0);
    let ir = 1 - mr; // effective msd of 1/r
    let digits = ir - p + 3;
    let pn = mr - digits;

    let lsf = -p - pn;
    if lsf < 0 {
        // the inverse is below the requested precision
        return Ok(BigInt::zero());
    }

    let divisor = r.approximate(pn)?;
    if divisor.is_zero() {
        return Err(RealError::DivisionByZero);
    }

    // long division with half the divisor added for round-to-nearest
    let dividend = BigInt::one() << lsf as usize;
    let adj = dividend + (divisor.abs() >> 1usize);
    let quotient = adj / divisor.abs();

    if divisor.is_negative() {
        Ok(-quotient)
    } else {
        Ok(quotient)
    }
}

fn approximate_condsign(
    cond: &Real,
    on_neg: &Real,
    on_pos: &Real,
    p: i64,
) -> Result<BigInt, RealError> {
    let probe = cond.approximate(-20)?;
    if probe.is_negative() {
        return on_neg.approximate(p);
    }
    if probe.is_positive() {
        return on_pos.approximate(p);
    }

    // Indeterminate probe: when both branches agree to the requested
    // precision the answer is theirs either way; otherwise force a sign
    // decision, which does not terminate if the condition is exactly zero.
    let ia = on_neg.approximate(p - 1)?;
    let ib = on_pos.approximate(p - 1)?;
    if (&ia - &ib).abs() <= BigInt::one() {
        return Ok(scale(&ia, -1));
    }

    if cond.sign() < 0 {
        Ok(scale(&ia, -1))
    } else {
        Ok(scale(&ib, -1))
    }
}
