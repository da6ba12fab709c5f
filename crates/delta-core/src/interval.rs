//! Closed intervals `[inf, sup]` over f64.

use crate::Real;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A closed interval. Invariant: `inf <= sup`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    inf: f64,
    sup: f64,
}

impl Interval {
    #[inline]
    pub fn new(inf: f64, sup: f64) -> Self {
        debug_assert!(inf <= sup, "Invalid interval: {inf} > {sup}");
        Self { inf, sup }
    }

    /// A degenerate (point) interval.
    #[inline]
    pub fn point(value: f64) -> Self {
        Self {
            inf: value,
            sup: value,
        }
    }

    /// The smallest representable interval strictly enclosing `value`,
    /// one ulp outward on each side. Absorbs the rounding error of the
    /// scalar computation that produced `value`.
    #[inline]
    pub fn outward(value: Real) -> Self {
        let v = value.value();
        Self {
            inf: v.next_down(),
            sup: v.next_up(),
        }
    }

    #[inline]
    pub fn inf(&self) -> f64 {
        self.inf
    }

    #[inline]
    pub fn sup(&self) -> f64 {
        self.sup
    }

    #[inline]
    pub fn midpoint(&self) -> Real {
        Real::new(self.inf + (self.sup - self.inf) / 2.0)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.sup - self.inf
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.inf <= value && value <= self.sup
    }

    /// Convex hull of two intervals.
    #[inline]
    pub fn union(&self, other: &Interval) -> Interval {
        Interval {
            inf: self.inf.min(other.inf),
            sup: self.sup.max(other.sup),
        }
    }

    /// Scale by an exact factor, rounding outward.
    pub fn scale(&self, factor: f64) -> Interval {
        let a = self.inf * factor;
        let b = self.sup * factor;
        Interval {
            inf: a.min(b).next_down(),
            sup: a.max(b).next_up(),
        }
    }

    /// Negate: `[-sup, -inf]`. Exact.
    #[inline]
    pub fn neg(&self) -> Interval {
        Interval {
            inf: -self.sup,
            sup: -self.inf,
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    /// Interval addition, rounded outward.
    fn add(self, rhs: Interval) -> Interval {
        Interval {
            inf: (self.inf + rhs.inf).next_down(),
            sup: (self.sup + rhs.sup).next_up(),
        }
    }
}

impl Mul for Interval {
    type Output = Interval;

    /// Interval multiplication, rounded outward.
    fn mul(self, rhs: Interval) -> Interval {
        let products = [
            self.inf * rhs.inf,
            self.inf * rhs.sup,
            self.sup * rhs.inf,
            self.sup * rhs.sup,
        ];
        let mut inf = products[0];
        let mut sup = products[0];
        for &p in &products[1..] {
            inf = inf.min(p);
            sup = sup.max(p);
        }
        Interval {
            inf: inf.next_down(),
            sup: sup.next_up(),
        }
    }
}
