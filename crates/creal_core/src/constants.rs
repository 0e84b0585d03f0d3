//! Process-wide named constants, built once on first use and shared by
//! every expression that references them. Sharing matters: the trackers of
//! π, e, … accumulate precision across all users.

use std::sync::LazyLock;

use tracing::debug;

use crate::node::{Kind, Real};

static ZERO: LazyLock<Real> = LazyLock::new(|| Real::named("0", Real::from(0)));
static ONE: LazyLock<Real> = LazyLock::new(|| Real::named("1", Real::from(1)));
static TWO: LazyLock<Real> = LazyLock::new(|| Real::named("2", Real::from(2)));
static TEN: LazyLock<Real> = LazyLock::new(|| Real::named("10", Real::from(10)));

static E: LazyLock<Real> =
    LazyLock::new(|| Real::named("e", Real::new(Kind::PrescaledExp(Real::from(1)))));

// π = 4·(6·arctan(1/8) + 2·arctan(1/57) + arctan(1/239))
static PI: LazyLock<Real> = LazyLock::new(|| {
    debug!("building π from its Machin-like formula");
    let m1 = &Real::from(6) * &arctan_inv(8);
    let m2 = &Real::from(2) * &arctan_inv(57);
    let m3 = arctan_inv(239);
    Real::named("π", &Real::from(4) * &(&m1 + &(&m2 + &m3)))
});

// φ = (1 + √5)/2
static PHI: LazyLock<Real> = LazyLock::new(|| {
    Real::named("φ", &(&Real::from(1) + &Real::from(5).sqrt()) / &Real::from(2))
});

static SQRT2: LazyLock<Real> = LazyLock::new(|| Real::named("√2", Real::from(2).sqrt()));

// ln 2 = 7·ln(10/9) − 2·ln(25/24) + 3·ln(81/80), three fast-converging
// near-one logarithms
static LN2: LazyLock<Real> = LazyLock::new(|| {
    let t1 = &Real::from(7) * &Real::from_ratio(10, 9).simple_ln();
    let t2 = &Real::from(2) * &Real::from_ratio(25, 24).simple_ln();
    let t3 = &Real::from(3) * &Real::from_ratio(81, 80).simple_ln();
    Real::named("ln2", &(&t1 - &t2) + &t3)
});

fn arctan_inv(a: i64) -> Real {
    Real::new(Kind::IntegralArctan(Real::from(a)))
}

impl Real {
    /// The constant 0.
    pub fn zero() -> Real {
        ZERO.clone()
    }

    /// The constant 1.
    pub fn one() -> Real {
        ONE.clone()
    }

    /// The constant 2.
    pub fn two() -> Real {
        TWO.clone()
    }

    /// The constant 10.
    pub fn ten() -> Real {
        TEN.clone()
    }

    /// Euler's number, straight from its Taylor series.
    pub fn e() -> Real {
        E.clone()
    }

    /// π, via the Machin-like formula
    /// `4·(6·arctan(1/8) + 2·arctan(1/57) + arctan(1/239))`.
    pub fn pi() -> Real {
        PI.clone()
    }

    /// The golden ratio `(1 + √5)/2`.
    pub fn phi() -> Real {
        PHI.clone()
    }

    /// √2.
    pub fn sqrt2() -> Real {
        SQRT2.clone()
    }

    /// ln 2.
    pub fn ln2() -> Real {
        LN2.clone()
    }
}
