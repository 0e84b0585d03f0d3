//! Shift-and-round helpers over [`BigInt`].
//!
//! Everything else the evaluator needs from big integers (add, mul,
//! truncating div, abs, sign, bit length) comes straight off `num-bigint`;
//! only the rounded rescale and the bit-count bound are worth naming.

use num_bigint::BigInt;
use num_traits::One;

/// Rounded multiplication by `2^n`: an exact left shift for `n ≥ 0`, and
/// `((i >> (−n−1)) + 1) >> 1` for `n < 0`.
pub(crate) fn scale(i: &BigInt, n: i64) -> BigInt {
    if n >= 0 {
        i << n as usize
    } else {
        let adj = signed_shift(i, n + 1) + BigInt::one();
        adj >> 1usize
    }
}

/// Unrounded shift in either direction.
pub(crate) fn signed_shift(i: &BigInt, n: i64) -> BigInt {
    match n {
        n if n < 0 => i >> (-n) as usize,
        n if n > 0 => i << n as usize,
        _ => i.clone(),
    }
}

/// `ceil(log2(|n| + 1))`: the number of bits needed to represent `|n|`.
pub(crate) fn bound_log2(n: i64) -> i64 {
    64 - i64::from(n.unsigned_abs().leading_zeros())
}
