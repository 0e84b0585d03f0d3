//! Range reduction onto the prescaled series kernels.
//!
//! Each wrapper probes its argument at a fixed coarse precision and rewrites
//! the expression until the series precondition holds. The probes run at
//! construction time, which is why these constructors are fallible: a
//! non-positive logarithm argument, or a division by zero buried in the
//! argument, surfaces here rather than at the first approximation.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Signed;
use tracing::trace;

use crate::error::RealError;
use crate::node::{Kind, Real};

impl Real {
    /// `e^self`.
    pub fn exp(&self) -> Result<Real, RealError> {
        let rough = self.approximate(-3)?;
        if rough.is_negative() {
            // e^−c = 1/e^c
            return Ok((-self).exp()?.inverse());
        }
        if rough > BigInt::from(2) {
            // e^c = (e^(c/2))²
            trace!("halving exp argument");
            return Ok(self.shift_right(1).exp()?.square());
        }
        Ok(Real::new(Kind::PrescaledExp(self.clone())))
    }

    /// Natural logarithm; fails for non-positive arguments.
    pub fn ln(&self) -> Result<Real, RealError> {
        let rough = self.approximate(-4)?;
        if rough.is_negative() {
            return Err(RealError::LnOfNonPositive);
        }
        if rough < BigInt::from(8) {
            // ln(c) = −ln(1/c)
            return Ok(-&self.inverse().ln()?);
        }
        if rough > BigInt::from(24) {
            // ln(c) = 4·ln(c^(1/4))
            trace!("quartering ln argument");
            return Ok(self.sqrt().sqrt().ln()?.shift_left(2));
        }
        Ok(self.simple_ln())
    }

    /// `ln(self)` without range reduction, feeding `self − 1` straight to
    /// the ln(1+x) series. Only converges quickly for arguments near one.
    pub fn simple_ln(&self) -> Real {
        Real::new(Kind::PrescaledLn(self - &Real::one()))
    }

    /// `cos(self)`.
    pub fn cos(&self) -> Result<Real, RealError> {
        let rough = self.approximate(-1)?;
        if *rough.magnitude() >= BigUint::from(6u32) {
            // subtract a multiple of π, flipping sign for odd multiples
            let mult = &rough / BigInt::from(6);
            let adj = &Real::pi() * &Real::from(mult.clone());
            let reduced = (self - &adj).cos()?;
            return Ok(if mult.is_odd() { -&reduced } else { reduced });
        }
        if *rough.magnitude() >= BigUint::from(2u32) {
            // cos(c) = 2·cos²(c/2) − 1
            let half = self.shift_right(1).cos()?;
            return Ok(&half.square().shift_left(1) - &Real::one());
        }
        Ok(Real::new(Kind::PrescaledCos(self.clone())))
    }

    /// `sin(self)`, as `cos(π/2 − self)`.
    pub fn sin(&self) -> Result<Real, RealError> {
        (&(&Real::pi() / &Real::two()) - self).cos()
    }

    /// `tan(self)`, as `sin/cos`. Where the cosine is zero the quotient is
    /// an inverse of zero, which fails at approximation time.
    pub fn tan(&self) -> Result<Real, RealError> {
        Ok(&self.sin()? / &self.cos()?)
    }

    /// `√self`. Negative arguments fail at approximation time.
    pub fn sqrt(&self) -> Real {
        Real::new(Kind::PrescaledSqrt(self.clone()))
    }

    /// `self^n = e^(ln(self)·n)` for arbitrary real `n`; fails for
    /// non-positive bases.
    pub fn pow(&self, n: &Real) -> Result<Real, RealError> {
        (&self.ln()? * n).exp()
    }

    /// `10^n`.
    pub fn pow10(n: &Real) -> Result<Real, RealError> {
        Real::ten().pow(n)
    }

    /// Interprets the value as degrees: `self · π/180`.
    pub fn to_radians(&self) -> Real {
        &(&Real::pi() / &Real::from(180)) * self
    }

    /// Interprets the value as radians: `self · 180/π`.
    pub fn to_degrees(&self) -> Real {
        &(&Real::from(180) / &Real::pi()) * self
    }
}
