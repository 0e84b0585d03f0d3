//! Arbitrary-precision rational numbers.
//!
//! A thin shell over [`BigRational`] whose one interesting contract is
//! [`Rational::to_constructive`]: the value crosses into the constructive
//! world as `numerator ÷ denominator`, after which the core's exact
//! machinery takes over. Everything else is ordinary field arithmetic.

use std::fmt;
use std::sync::LazyLock;

use creal_core::Real;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// An exact rational number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rational(BigRational);

static ZERO: LazyLock<Rational> = LazyLock::new(|| Rational::from_i64s(0, 1));
static ONE: LazyLock<Rational> = LazyLock::new(|| Rational::from_i64s(1, 1));

impl Rational {
    /// `a / b`, reduced. Panics when `b` is zero.
    pub fn new(a: BigInt, b: BigInt) -> Rational {
        Rational(BigRational::new(a, b))
    }

    /// `a / b` from machine integers. Panics when `b` is zero.
    pub fn from_i64s(a: i64, b: i64) -> Rational {
        Rational(BigRational::new(BigInt::from(a), BigInt::from(b)))
    }

    pub fn from_big_rational(r: BigRational) -> Rational {
        Rational(r)
    }

    /// The constant 0.
    pub fn zero() -> Rational {
        ZERO.clone()
    }

    /// The constant 1.
    pub fn one() -> Rational {
        ONE.clone()
    }

    /// The same value as a constructive real: `numerator ÷ denominator`.
    pub fn to_constructive(&self) -> Real {
        let num = Real::from(self.0.numer().clone());
        let denom = Real::from(self.0.denom().clone());
        &num / &denom
    }

    pub fn add(&self, other: &Rational) -> Rational {
        Rational(&self.0 + &other.0)
    }

    pub fn sub(&self, other: &Rational) -> Rational {
        Rational(&self.0 - &other.0)
    }

    pub fn mul(&self, other: &Rational) -> Rational {
        Rational(&self.0 * &other.0)
    }

    /// Panics when `other` is zero.
    pub fn div(&self, other: &Rational) -> Rational {
        Rational(&self.0 / &other.0)
    }

    pub fn neg(&self) -> Rational {
        Rational(-&self.0)
    }

    /// The multiplicative inverse, or `None` for zero.
    pub fn inverse(&self) -> Option<Rational> {
        if self.0.is_zero() {
            None
        } else {
            Some(Rational(self.0.recip()))
        }
    }

    /// `self · 2^n`.
    pub fn shift_left(&self, n: u32) -> Rational {
        Rational(&self.0 * BigRational::from_integer(BigInt::one() << n as usize))
    }

    /// `self / 2^n`.
    pub fn shift_right(&self, n: u32) -> Rational {
        Rational(&self.0 / BigRational::from_integer(BigInt::one() << n as usize))
    }

    /// −1, 0, or 1.
    pub fn sign(&self) -> i32 {
        if self.0.is_zero() {
            0
        } else if self.0.is_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
