//! Operator impls over `&Real`. Each operator builds a new DAG node sharing
//! its operands.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::node::{Kind, Real};

impl Add for &Real {
    type Output = Real;

    fn add(self, rhs: &Real) -> Real {
        Real::new(Kind::Add(self.clone(), rhs.clone()))
    }
}

impl Sub for &Real {
    type Output = Real;

    /// `a − b` is `a + (−b)`.
    fn sub(self, rhs: &Real) -> Real {
        self + &(-rhs)
    }
}

impl Mul for &Real {
    type Output = Real;

    fn mul(self, rhs: &Real) -> Real {
        Real::new(Kind::Mul(self.clone(), rhs.clone()))
    }
}

impl Div for &Real {
    type Output = Real;

    /// `a / b` is `a · (1/b)`.
    fn div(self, rhs: &Real) -> Real {
        self * &rhs.inverse()
    }
}

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real::new(Kind::Neg(self.clone()))
    }
}
