//! Scalar arithmetic for rigorous bound computation.
//!
//! [`Real`] wraps an `f64`. Plain operators round to nearest and are used
//! for expansion coefficients (whose rounding error is absorbed by outward
//! coefficient intervals); the `*_up` variants round one ulp toward +∞
//! after every step and are used wherever a quantity feeds a remainder
//! bound, so the remainder can only get wider, never narrower.

use crate::Interval;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar with directed-rounding helpers for sound bound computation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Real(f64);

impl Real {
    pub const ZERO: Real = Real(0.0);
    pub const ONE: Real = Real(1.0);

    #[inline]
    pub fn new(value: f64) -> Self {
        Real(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn exp(self) -> Real {
        Real(self.0.exp())
    }

    #[inline]
    pub fn abs(self) -> Real {
        Real(self.0.abs())
    }

    #[inline]
    pub fn max(self, other: Real) -> Real {
        Real(self.0.max(other.0))
    }

    #[inline]
    pub fn powi(self, n: i32) -> Real {
        Real(self.0.powi(n))
    }

    /// Multiply, rounding the result one ulp toward +∞.
    #[inline]
    pub fn mul_up(self, rhs: Real) -> Real {
        Real((self.0 * rhs.0).next_up())
    }

    /// Divide, rounding the result one ulp toward +∞.
    #[inline]
    pub fn div_up(self, rhs: Real) -> Real {
        Real((self.0 / rhs.0).next_up())
    }

    /// Integer power with upward rounding at every step.
    ///
    /// Only meaningful for non-negative bases; callers pass magnitudes.
    pub fn pow_up(self, n: u32) -> Real {
        let mut acc = Real::ONE;
        for _ in 0..n {
            acc = acc.mul_up(self);
        }
        acc
    }

    /// One ulp toward +∞.
    #[inline]
    pub fn round_up(self) -> Real {
        Real(self.0.next_up())
    }

    /// Symmetric interval `[-|r|, |r|]` widened one ulp outward.
    pub fn to_sym_interval(self) -> Interval {
        let magnitude = self.0.abs().next_up();
        Interval::new(-magnitude, magnitude)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real(value)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Real {
    type Output = Real;
    fn add(self, rhs: Real) -> Real {
        Real(self.0 + rhs.0)
    }
}

impl Sub for Real {
    type Output = Real;
    fn sub(self, rhs: Real) -> Real {
        Real(self.0 - rhs.0)
    }
}

impl Mul for Real {
    type Output = Real;
    fn mul(self, rhs: Real) -> Real {
        Real(self.0 * rhs.0)
    }
}

impl Div for Real {
    type Output = Real;
    fn div(self, rhs: Real) -> Real {
        Real(self.0 / rhs.0)
    }
}

impl Neg for Real {
    type Output = Real;
    fn neg(self) -> Real {
        Real(-self.0)
    }
}
