//! Monomial/polynomial algebra for Taylor-model expansions.
//!
//! A monomial is an interval coefficient paired with a degree vector over
//! the declared variables; slot 0 of the degree vector is the reserved
//! time coordinate and stays zero in everything this workspace builds.
//! Enclosure construction only needs addition, subtraction, and rigorous
//! evaluation, so that is all the algebra implemented here.

use crate::Interval;
use std::ops::{Add, AddAssign, Sub};

/// An interval coefficient times a product of variable powers.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    coefficient: Interval,
    degrees: Vec<u32>,
}

impl Monomial {
    pub fn new(coefficient: Interval, degrees: Vec<u32>) -> Self {
        Self {
            coefficient,
            degrees,
        }
    }

    /// A constant monomial (all degrees zero).
    pub fn constant(coefficient: Interval, num_vars: usize) -> Self {
        Self {
            coefficient,
            degrees: vec![0; num_vars],
        }
    }

    pub fn coefficient(&self) -> Interval {
        self.coefficient
    }

    pub fn degrees(&self) -> &[u32] {
        &self.degrees
    }

    /// Rigorous value of this monomial at a concrete point. The variable
    /// power is accumulated as an outward interval so its rounding error
    /// widens the result instead of shifting it.
    fn evaluate(&self, point: &[f64]) -> Interval {
        let mut power = Interval::point(1.0);
        for (x, &d) in point.iter().zip(&self.degrees) {
            for _ in 0..d {
                power = power.scale(*x);
            }
        }
        self.coefficient * power
    }
}

/// A sum of monomials.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    monomials: Vec<Monomial>,
}

impl Polynomial {
    /// Build from a list of monomials, merging duplicate degree vectors.
    pub fn new(monomials: Vec<Monomial>) -> Self {
        let mut poly = Polynomial {
            monomials: Vec::with_capacity(monomials.len()),
        };
        for m in monomials {
            poly.push(m);
        }
        poly
    }

    /// The zero polynomial, represented as a single zero constant.
    pub fn zero(num_vars: usize) -> Self {
        Polynomial {
            monomials: vec![Monomial::constant(Interval::point(0.0), num_vars)],
        }
    }

    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    /// Rigorous value of the polynomial at a concrete point, rounded
    /// outward at every accumulation step.
    pub fn evaluate(&self, point: &[f64]) -> Interval {
        let mut total = Interval::point(0.0);
        for m in &self.monomials {
            total = total + m.evaluate(point);
        }
        total
    }

    fn push(&mut self, monomial: Monomial) {
        if let Some(existing) = self
            .monomials
            .iter_mut()
            .find(|m| m.degrees == monomial.degrees)
        {
            existing.coefficient = existing.coefficient + monomial.coefficient;
        } else {
            self.monomials.push(monomial);
        }
    }
}

impl From<Monomial> for Polynomial {
    fn from(monomial: Monomial) -> Self {
        Polynomial {
            monomials: vec![monomial],
        }
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += rhs;
        self
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        for m in rhs.monomials {
            self.push(m);
        }
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(mut self, rhs: Polynomial) -> Polynomial {
        for m in rhs.monomials {
            self.push(Monomial::new(m.coefficient.neg(), m.degrees));
        }
        self
    }
}
