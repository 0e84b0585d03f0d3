//! Unified reals: a constructive real times an exact rational.
//!
//! A [`Unified`] keeps the irrational "shape" of a value in its constructive
//! part and everything rational in an exact multiplier, so scalar operations
//! (negation, scaling, adding commensurable values) never touch the
//! approximation machinery. Only when two values with different constructive
//! parts meet does the pair collapse into a single constructive expression.

use std::fmt;
use std::sync::LazyLock;

use creal_core::Real;
use creal_rational::Rational;

/// A real number represented as `constructive · rational`.
#[derive(Debug, Clone)]
pub struct Unified {
    cr: Real,
    rr: Rational,
}

static ZERO: LazyLock<Unified> =
    LazyLock::new(|| Unified::new(Real::one(), Rational::zero()));
static ONE: LazyLock<Unified> = LazyLock::new(|| Unified::new(Real::one(), Rational::one()));
static TWO: LazyLock<Unified> =
    LazyLock::new(|| Unified::new(Real::one(), Rational::from_i64s(2, 1)));
static TEN: LazyLock<Unified> =
    LazyLock::new(|| Unified::new(Real::one(), Rational::from_i64s(10, 1)));
static HALF: LazyLock<Unified> =
    LazyLock::new(|| Unified::new(Real::one(), Rational::from_i64s(1, 2)));
static NEGATIVE_ONE: LazyLock<Unified> =
    LazyLock::new(|| Unified::new(Real::one(), Rational::from_i64s(-1, 1)));
static E: LazyLock<Unified> = LazyLock::new(|| Unified::new(Real::e(), Rational::one()));
static PI: LazyLock<Unified> = LazyLock::new(|| Unified::new(Real::pi(), Rational::one()));
static PHI: LazyLock<Unified> = LazyLock::new(|| Unified::new(Real::phi(), Rational::one()));
static SQRT2: LazyLock<Unified> =
    LazyLock::new(|| Unified::new(Real::sqrt2(), Rational::one()));
static LN2: LazyLock<Unified> = LazyLock::new(|| Unified::new(Real::ln2(), Rational::one()));

impl Unified {
    pub fn new(cr: Real, rr: Rational) -> Unified {
        Unified { cr, rr }
    }

    /// `cr · 1`.
    pub fn from_constructive(cr: Real) -> Unified {
        Unified::new(cr, Rational::one())
    }

    /// `1 · rr`.
    pub fn from_rational(rr: Rational) -> Unified {
        Unified::new(Real::one(), rr)
    }

    /// The value as a single constructive real.
    pub fn constructive(&self) -> Real {
        &self.cr * &self.rr.to_constructive()
    }

    /// Addition. Two values sharing the same constructive node add on the
    /// rational side without growing the expression DAG.
    pub fn add(&self, other: &Unified) -> Unified {
        if Real::ptr_eq(&self.cr, &other.cr) {
            return Unified::new(self.cr.clone(), self.rr.add(&other.rr));
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }
        Unified::new(
            &self.constructive() + &other.constructive(),
            Rational::one(),
        )
    }

    pub fn sub(&self, other: &Unified) -> Unified {
        self.add(&other.neg())
    }

    /// Multiplication. A unit constructive part on either side keeps the
    /// other side's expression intact.
    pub fn mul(&self, other: &Unified) -> Unified {
        if Real::ptr_eq(&self.cr, &Real::one()) {
            return Unified::new(other.cr.clone(), self.rr.mul(&other.rr));
        }
        if Real::ptr_eq(&other.cr, &Real::one()) {
            return Unified::new(self.cr.clone(), self.rr.mul(&other.rr));
        }
        if self.is_zero() || other.is_zero() {
            return Unified::new(Real::one(), Rational::zero());
        }
        Unified::new(&self.cr * &other.cr, self.rr.mul(&other.rr))
    }

    pub fn div(&self, other: &Unified) -> Unified {
        self.mul(&other.inverse())
    }

    /// The multiplicative inverse. Inverting a rational zero leaves a unit
    /// multiplier; the division by zero then surfaces when the constructive
    /// part is approximated.
    pub fn inverse(&self) -> Unified {
        Unified::new(
            self.cr.inverse(),
            self.rr.inverse().unwrap_or_else(Rational::one),
        )
    }

    pub fn neg(&self) -> Unified {
        Unified::new(self.cr.clone(), self.rr.neg())
    }

    /// `self · 2^n`.
    pub fn shift_left(&self, n: u32) -> Unified {
        Unified::new(self.cr.clone(), self.rr.shift_left(n))
    }

    /// `self / 2^n`.
    pub fn shift_right(&self, n: u32) -> Unified {
        Unified::new(self.cr.clone(), self.rr.shift_right(n))
    }

    /// Zero exactly when the rational part is zero. The constructive part
    /// cannot decide zeroness, since it only ever approximates.
    pub fn is_zero(&self) -> bool {
        self.rr.is_zero()
    }

    /// Fixed-point rendering via the constructive core.
    pub fn to_fixed(&self, decimals: u32, radix: u32) -> String {
        self.constructive().to_fixed(decimals, radix)
    }

    pub fn zero() -> Unified {
        ZERO.clone()
    }

    pub fn one() -> Unified {
        ONE.clone()
    }

    pub fn two() -> Unified {
        TWO.clone()
    }

    pub fn ten() -> Unified {
        TEN.clone()
    }

    pub fn half() -> Unified {
        HALF.clone()
    }

    pub fn negative_one() -> Unified {
        NEGATIVE_ONE.clone()
    }

    pub fn e() -> Unified {
        E.clone()
    }

    pub fn pi() -> Unified {
        PI.clone()
    }

    pub fn phi() -> Unified {
        PHI.clone()
    }

    pub fn sqrt2() -> Unified {
        SQRT2.clone()
    }

    pub fn ln2() -> Unified {
        LN2.clone()
    }
}

impl fmt::Display for Unified {
    /// `{:.N}` renders `N` fractional decimal digits (30 without a
    /// precision). A value whose constructive part is the shared unit node
    /// prints as a bare rational.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prec) = f.precision() {
            return f.write_str(&self.to_fixed(prec as u32, 10));
        }
        if Real::ptr_eq(&self.cr, &Real::one()) {
            return write!(f, "{}", self.rr);
        }
        f.write_str(&self.to_fixed(30, 10))
    }
}
