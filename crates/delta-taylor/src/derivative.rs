//! Closed-form recursive derivative evaluators.
//!
//! Sigmoid derivatives come from the bivariate recursion over products
//! `sigmoid(x)^l * (1 - sigmoid(x))^r`:
//!
//! ```text
//! lambda(l, r, order, x) = l * lambda(l, r+1, order, x) - r * lambda(l+1, r, order, x)
//! ```
//!
//! closing at `l + r = order + 1` as the product itself; the order-th
//! sigmoid derivative is `lambda(1, 1, order, x)`. Tanh has the analogous
//! recursion over `(1 - tanh(x)^2)^r * tanh(x)^l`. The swish-family
//! derivatives are hand-derived combinations of `sigmoid(beta*x)` and the
//! sigmoid recursion at `beta*x`, scaled by powers of beta; each variant
//! keeps its explicit constants. Recursion depth is bounded by `order`
//! (at most 4 here), so there is no stack concern.

use crate::activation::{sigmoid, tanh};
use delta_core::Real;

fn lambda(l: u32, r: u32, order: u32, x: Real) -> Real {
    if l + r == order + 1 {
        let sig = sigmoid(x).powi(l as i32);
        let one_minus_sig = (Real::ONE - sigmoid(x)).powi(r as i32);
        sig * one_minus_sig
    } else {
        Real::new(l as f64) * lambda(l, r + 1, order, x)
            - Real::new(r as f64) * lambda(l + 1, r, order, x)
    }
}

fn tanh_lambda(l: u32, r: u32, rec: u32, order: u32, x: Real) -> Real {
    if rec == order - 1 {
        let mut output = (Real::ONE - tanh(x) * tanh(x)).powi(r as i32);
        if l > 0 {
            output = output * tanh(x).powi(l as i32);
        }
        output
    } else {
        let mut output =
            Real::new(-2.0 * r as f64) * tanh_lambda(l + 1, r, rec + 1, order, x);
        if l > 0 {
            output = output + Real::new(l as f64) * tanh_lambda(l - 1, r + 1, rec + 1, order, x);
        }
        output
    }
}

/// Exact `order`-th derivative of sigmoid at `x`.
pub fn sigmoid_derivative(order: u32, x: Real) -> Real {
    lambda(1, 1, order, x)
}

/// Exact `order`-th derivative of tanh at `x`.
pub fn tanh_derivative(order: u32, x: Real) -> Real {
    tanh_lambda(0, 1, 0, order, x)
}

pub fn swish_first_derivative(x: Real) -> Real {
    sigmoid(x) + x * lambda(1, 1, 1, x)
}

pub fn swish_second_derivative(x: Real) -> Real {
    Real::new(2.0) * lambda(1, 1, 1, x) + x * lambda(1, 1, 2, x)
}

pub fn swish_third_derivative(x: Real) -> Real {
    Real::new(3.0) * lambda(1, 1, 2, x) + x * lambda(1, 1, 3, x)
}

pub fn swish_ten_first_derivative(x: Real) -> Real {
    let bx = Real::new(10.0) * x;
    sigmoid(bx) + Real::new(10.0) * x * lambda(1, 1, 1, bx)
}

pub fn swish_ten_second_derivative(x: Real) -> Real {
    let bx = Real::new(10.0) * x;
    Real::new(20.0) * lambda(1, 1, 1, bx) + Real::new(100.0) * x * lambda(1, 1, 2, bx)
}

pub fn swish_ten_third_derivative(x: Real) -> Real {
    let bx = Real::new(10.0) * x;
    Real::new(300.0) * lambda(1, 1, 2, bx) + Real::new(1000.0) * x * lambda(1, 1, 3, bx)
}

pub fn swish_hundred_first_derivative(x: Real) -> Real {
    let bx = Real::new(100.0) * x;
    sigmoid(bx) + Real::new(100.0) * x * lambda(1, 1, 1, bx)
}

pub fn swish_hundred_second_derivative(x: Real) -> Real {
    let bx = Real::new(100.0) * x;
    Real::new(200.0) * lambda(1, 1, 1, bx) + Real::new(10000.0) * x * lambda(1, 1, 2, bx)
}

pub fn swish_hundred_third_derivative(x: Real) -> Real {
    let bx = Real::new(100.0) * x;
    Real::new(30000.0) * lambda(1, 1, 2, bx) + Real::new(1000000.0) * x * lambda(1, 1, 3, bx)
}
