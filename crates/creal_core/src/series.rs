//! Truncated-series kernels for the prescaled transcendental nodes.
//!
//! Each kernel sums `O(|p|)` terms, held as integers scaled by
//! `2^(−calcPrec)` where `calcPrec ≈ p − log2(iterations) − 4`; the extra
//! guard bits absorb the per-term rounding. The uniform termination
//! criterion is `|term| < 2^(p−4−calcPrec)`. Arguments are assumed to be in
//! the kernel's convergence domain; the range-reduction wrappers enforce
//! that before building the node.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::trace;

use crate::approx::msd;
use crate::bigint::{bound_log2, scale, signed_shift};
use crate::error::RealError;
use crate::node::Real;

fn trunc_bound(p: i64, calc_prec: i64) -> BigUint {
    BigUint::one() << (p - 4 - calc_prec) as usize
}

/// e^r for |r| ≤ 2, by the Taylor series at zero.
pub(crate) fn exp(r: &Real, p: i64) -> Result<BigInt, RealError> {
    if p >= 1 {
        return Ok(BigInt::zero());
    }

    let iters = -p / 2 + 2;
    let calc_prec = p - bound_log2(2 * iters) - 4;
    let op_prec = p - 3;
    let op_appr = r.approximate(op_prec)?;

    let max_trunc = trunc_bound(p, calc_prec);
    let mut term = BigInt::one() << (-calc_prec) as usize;
    let mut sum = term.clone();
    let mut n = 0i64;
    while *term.magnitude() >= max_trunc {
        n += 1;
        term = scale(&(term * &op_appr), op_prec);
        term /= BigInt::from(n);
        sum += &term;
    }
    trace!(terms = n, precision = p, "exp series converged");

    Ok(scale(&sum, calc_prec - p))
}

/// ln(1 + r) for |r| < 1, by the alternating Mercator series.
pub(crate) fn ln1p(r: &Real, p: i64) -> Result<BigInt, RealError> {
    if p >= 0 {
        return Ok(BigInt::zero());
    }

    let iters = -p - 1;
    let calc_prec = p - bound_log2(2 * iters) - 4;
    let op_prec = p - 3;
    let op_appr = r.approximate(op_prec)?;

    let max_trunc = trunc_bound(p, calc_prec);
    let mut x_to_n = scale(&op_appr, op_prec - calc_prec);
    let mut term = x_to_n.clone();
    let mut sum = term.clone();
    let mut n = 1i64;
    let mut sign = 1i64;
    while *term.magnitude() >= max_trunc {
        n += 1;
        sign = -sign;
        x_to_n = scale(&(x_to_n * &op_appr), op_prec);
        term = &x_to_n / BigInt::from(sign * n);
        sum += &term;
    }
    trace!(terms = n, precision = p, "ln series converged");

    Ok(scale(&sum, calc_prec - p))
}

/// cos(r) for |r| < 2. Even powers only; the negative divisor
/// `−n(n−1)` bakes the alternating sign into the running term.
pub(crate) fn cos(r: &Real, p: i64) -> Result<BigInt, RealError> {
    if p >= 1 {
        return Ok(BigInt::zero());
    }

    let iters = -p / 2 - 2;
    let calc_prec = p - bound_log2(2 * iters) - 4;
    let op_prec = p - 3;
    let op_appr = r.approximate(op_prec)?;

    let max_trunc = trunc_bound(p, calc_prec);
    let mut term = BigInt::one() << (-calc_prec) as usize;
    let mut sum = term.clone();
    let mut n = 0i64;
    while *term.magnitude() >= max_trunc {
        n += 2;
        term = scale(&(term * &op_appr), op_prec);
        term = scale(&(term * &op_appr), op_prec);
        term /= BigInt::from(-n * (n - 1));
        sum += &term;
    }
    trace!(terms = n / 2, precision = p, "cos series converged");

    Ok(scale(&sum, calc_prec - p))
}

/// arctan(1/a) for |a| ≥ 2, by the Gregory series in 1/a. The argument is
/// evaluated once at integer accuracy; the Machin construction of π only
/// passes small integers (8, 57, 239).
pub(crate) fn arctan_inverse(a: &Real, p: i64) -> Result<BigInt, RealError> {
    if p >= 1 {
        return Ok(BigInt::zero());
    }

    let iters = -p / 2 + 2;
    let calc_prec = p - bound_log2(2 * iters) - 4;

    let ia = a.approximate(0)?;
    let isq = &ia * &ia;

    let max_trunc = trunc_bound(p, calc_prec);
    let mut power = (BigInt::one() << (-calc_prec) as usize) / &ia;
    let mut term = power.clone();
    let mut sum = power.clone();
    let mut n = 1i64;
    let mut sign = 1i64;
    while *term.magnitude() >= max_trunc {
        n += 2;
        power = &power / &isq;
        sign = -sign;
        term = &power / BigInt::from(sign * n);
        sum += &term;
    }
    trace!(terms = n / 2, precision = p, "arctan series converged");

    Ok(scale(&sum, calc_prec - p))
}

/// √r for r ≥ 0. Above 40 result digits a Newton step halves the needed
/// precision by approximating the root itself more coarsely; below, the
/// seed comes from a 60-bit float square root, good for ~30 bits.
pub(crate) fn sqrt(node: &Real, r: &Real, p: i64) -> Result<BigInt, RealError> {
    let pn = 2 * p - 1;
    let mr = match msd(r, pn)? {
        Some(m) if m > pn => m,
        _ => return Ok(BigInt::zero()),
    };

    let digits = mr / 2 - p;
    if digits > 40 {
        let pa = mr / 2 - (digits / 2 + 6);
        let ic = node.approximate(pa)?;
        let ir = r.approximate(2 * pa)?;

        // one Newton step: ((c² + r)/c + 1) / 2, everything scaled to p
        let numerator = scale(&(&ic * &ic + ir), pa - p);
        return Ok((numerator / &ic + BigInt::one()) >> 1usize);
    }

    let pa = (mr - 60) & !1;
    let ir = r.approximate(pa)? << 60usize;
    if ir.is_negative() {
        return Err(RealError::SqrtOfNegative);
    }

    let fp = ir.to_f64().unwrap_or(0.0);
    let root = BigInt::from(fp.sqrt() as i64);
    Ok(signed_shift(&root, (pa - 60) / 2 - p))
}
