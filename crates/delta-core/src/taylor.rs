//! Taylor models (polynomial + remainder enclosures) and per-layer reset
//! maps.

use crate::{Interval, Monomial, Polynomial};

/// A rigorous enclosure: for every concrete input in the declared input
/// range, the enclosed function's value lies in
/// `expansion(input) + remainder`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaylorModel {
    pub expansion: Polynomial,
    pub remainder: Interval,
}

impl TaylorModel {
    pub fn new(expansion: Polynomial, remainder: Interval) -> Self {
        Self {
            expansion,
            remainder,
        }
    }

    /// The exact-zero enclosure.
    pub fn zero(num_vars: usize) -> Self {
        Self {
            expansion: Polynomial::zero(num_vars),
            remainder: Interval::point(0.0),
        }
    }

    /// The exact pass-through enclosure for state variable `var_ind`
    /// (slot `var_ind + 1`; slot 0 is the reserved time coordinate).
    pub fn identity(var_ind: usize, num_vars: usize) -> Self {
        let mut degrees = vec![0; num_vars];
        degrees[var_ind + 1] = 1;
        Self {
            expansion: Polynomial::from(Monomial::new(Interval::point(1.0), degrees)),
            remainder: Interval::point(0.0),
        }
    }

    /// Rigorous value of the enclosure at a concrete point.
    pub fn eval(&self, point: &[f64]) -> Interval {
        self.expansion.evaluate(point) + self.remainder
    }
}

/// One network layer's pre-activation affine map: an enclosure per state
/// variable plus a flag marking the variables this layer passes through
/// unchanged.
///
/// Both sequences have length `num_vars - 1` (the reserved time
/// coordinate is excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct ResetMap {
    pub components: Vec<TaylorModel>,
    pub is_identity: Vec<bool>,
}

impl ResetMap {
    pub fn new(components: Vec<TaylorModel>, is_identity: Vec<bool>) -> Self {
        debug_assert_eq!(
            components.len(),
            is_identity.len(),
            "reset map sequences must be parallel"
        );
        Self {
            components,
            is_identity,
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
