//! Conversions into [`Real`] and derived constructors.

use num_bigint::BigInt;

use crate::error::RealError;
use crate::node::Real;

impl From<BigInt> for Real {
    fn from(i: BigInt) -> Real {
        Real::integer(i)
    }
}

impl From<i64> for Real {
    fn from(i: i64) -> Real {
        Real::integer(BigInt::from(i))
    }
}

impl From<i32> for Real {
    fn from(i: i32) -> Real {
        Real::integer(BigInt::from(i))
    }
}

impl Real {
    /// The exact value of an IEEE-754 double, via bit-field extraction so
    /// that subnormals survive bit-for-bit. NaN and infinities are rejected.
    pub fn from_f64(f: f64) -> Result<Real, RealError> {
        if !f.is_finite() {
            return Err(RealError::NotFinite);
        }

        let bits = f.to_bits() & !(1u64 << 63);
        let mut mantissa = bits & ((1u64 << 52) - 1);
        let biased = bits >> 52;
        let exponent = biased as i64 - 1075;
        if biased != 0 {
            mantissa += 1 << 52;
        } else {
            // subnormal: no implicit bit
            mantissa <<= 1;
        }

        let r = Real::integer(BigInt::from(mantissa)).shift_left(exponent);
        Ok(if f < 0.0 { -&r } else { r })
    }

    /// The exact value of an IEEE-754 single.
    pub fn from_f32(f: f32) -> Result<Real, RealError> {
        Real::from_f64(f64::from(f))
    }

    /// The exact rational `a / b`. A zero denominator is a division by zero
    /// at approximation time.
    pub fn from_ratio(a: i64, b: i64) -> Real {
        &Real::from(a) / &Real::from(b)
    }

    /// Evaluates the continued fraction `[a₀; a₁, a₂, …]`, i.e.
    /// `a₀ + 1/(a₁ + 1/(a₂ + …))`. An empty slice is zero.
    pub fn continued_fraction(terms: &[Real]) -> Real {
        let Some((last, rest)) = terms.split_last() else {
            return Real::zero();
        };
        rest.iter()
            .rev()
            .fold(last.clone(), |acc, t| t + &acc.inverse())
    }

    /// [`continued_fraction`](Real::continued_fraction) over integer terms.
    pub fn continued_fraction_i64(terms: &[i64]) -> Real {
        let reals: Vec<Real> = terms.iter().map(|&t| Real::from(t)).collect();
        Real::continued_fraction(&reals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_approximate_exactly() {
        let one = Real::from(1);
        for (p, want) in [(-3, 8), (-2, 4), (-1, 2), (0, 1), (1, 1)] {
            assert_eq!(one.approximate(p), Ok(BigInt::from(want)), "p = {p}");
        }
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert_eq!(Real::from_f64(f64::NAN), Err(RealError::NotFinite));
        assert_eq!(Real::from_f64(f64::INFINITY), Err(RealError::NotFinite));
        assert_eq!(Real::from_f64(f64::NEG_INFINITY), Err(RealError::NotFinite));
    }

    #[test]
    fn from_f64_simple_values() {
        let half = Real::from_f64(0.5).unwrap();
        assert_eq!(half.approximate(-1), Ok(BigInt::from(1)));

        let neg = Real::from_f64(-2.25).unwrap();
        assert_eq!(neg.approximate(-2), Ok(BigInt::from(-9)));

        let zero = Real::from_f64(-0.0).unwrap();
        assert_eq!(zero.approximate(0), Ok(BigInt::from(0)));
    }

    #[test]
    fn from_f64_preserves_subnormals() {
        // smallest positive subnormal: 2^-1074
        let tiny = Real::from_f64(f64::from_bits(1)).unwrap();
        assert_eq!(tiny.approximate(-1074), Ok(BigInt::from(1)));
        assert_eq!(tiny.approximate(-1073), Ok(BigInt::from(1)));
        assert_eq!(tiny.approximate(-1072), Ok(BigInt::from(0)));
    }

    #[test]
    fn from_f64_implicit_bit_at_large_magnitude() {
        // 2^52 has biased exponent 1075; the implicit bit must still apply
        let big = Real::from_f64(4503599627370496.0).unwrap();
        assert_eq!(big.approximate(0), Ok(BigInt::from(1u64 << 52)));
    }
}
