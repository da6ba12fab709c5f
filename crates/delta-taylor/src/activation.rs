//! Point evaluators for the supported activation families.

use delta_core::Real;

pub fn sigmoid(x: Real) -> Real {
    Real::ONE / (Real::ONE + (-x).exp())
}

pub fn tanh(x: Real) -> Real {
    let pos = x.exp();
    let neg = (-x).exp();
    (pos - neg) / (pos + neg)
}

/// `swish(x) = x * sigmoid(x)`.
pub fn swish(x: Real) -> Real {
    x * sigmoid(x)
}

/// `swish_ten(x) = x * sigmoid(10x)`.
pub fn swish_ten(x: Real) -> Real {
    x * sigmoid(Real::new(10.0) * x)
}

/// `swish_hundred(x) = x * sigmoid(100x)`, the smooth ReLU surrogate.
pub fn swish_hundred(x: Real) -> Real {
    x * sigmoid(Real::new(100.0) * x)
}
