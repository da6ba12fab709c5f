//! Degree-adaptive Taylor-expansion enclosures ("resets").
//!
//! One parametrized routine builds the enclosure for every smooth
//! activation: a degree-2 expansion around the range midpoint with a
//! remainder sized by the rigorous third-derivative bound, escalating to
//! degree 3 (fourth-derivative bound) when the remainder is wider than
//! [`REMAINDER_WIDTH_LIMIT`]. The degree-3 result is returned regardless
//! of whether it meets the threshold; the enclosure is still sound, just
//! wider than ideal.

use crate::activation::{sigmoid, swish, swish_hundred, swish_ten, tanh};
use crate::bounds;
use crate::derivative::{
    sigmoid_derivative, swish_first_derivative, swish_hundred_first_derivative,
    swish_hundred_second_derivative, swish_hundred_third_derivative, swish_second_derivative,
    swish_ten_first_derivative, swish_ten_second_derivative, swish_ten_third_derivative,
    swish_third_derivative, tanh_derivative,
};
use delta_core::{ActivationKind, Interval, Monomial, Polynomial, Real, TaylorModel};
use tracing::debug;

/// Remainder width above which the builder escalates from degree 2 to 3.
const REMAINDER_WIDTH_LIMIT: f64 = 1e-5;

/// Input magnitude at which `relu(x) - swish_hundred(x)` peaks.
const DEVIATION_PEAK_INPUT: f64 = 0.0127;

/// Conservative global bound on `relu(x) - swish_hundred(x)`.
const MAX_DEVIATION: f64 = 0.0028;

/// Value and derivative evaluators for one activation, paired with its
/// third/fourth derivative bound tables.
struct TaylorScheme {
    value: fn(Real) -> Real,
    first: fn(Real) -> Real,
    second: fn(Real) -> Real,
    third: fn(Real) -> Real,
    third_bound: fn(Interval) -> Real,
    fourth_bound: fn(Interval) -> Real,
}

fn sigmoid_first(x: Real) -> Real {
    sigmoid_derivative(1, x)
}

fn sigmoid_second(x: Real) -> Real {
    sigmoid_derivative(2, x)
}

fn sigmoid_third(x: Real) -> Real {
    sigmoid_derivative(3, x)
}

fn tanh_first(x: Real) -> Real {
    tanh_derivative(1, x)
}

fn tanh_second(x: Real) -> Real {
    tanh_derivative(2, x)
}

fn tanh_third(x: Real) -> Real {
    tanh_derivative(3, x)
}

static SIGMOID_SCHEME: TaylorScheme = TaylorScheme {
    value: sigmoid,
    first: sigmoid_first,
    second: sigmoid_second,
    third: sigmoid_third,
    third_bound: bounds::sigmoid_third_derivative_bound,
    fourth_bound: bounds::sigmoid_fourth_derivative_bound,
};

static TANH_SCHEME: TaylorScheme = TaylorScheme {
    value: tanh,
    first: tanh_first,
    second: tanh_second,
    third: tanh_third,
    third_bound: bounds::tanh_third_derivative_bound,
    fourth_bound: bounds::tanh_fourth_derivative_bound,
};

static SWISH_SCHEME: TaylorScheme = TaylorScheme {
    value: swish,
    first: swish_first_derivative,
    second: swish_second_derivative,
    third: swish_third_derivative,
    third_bound: bounds::swish_third_derivative_bound,
    fourth_bound: bounds::swish_fourth_derivative_bound,
};

static SWISH_TEN_SCHEME: TaylorScheme = TaylorScheme {
    value: swish_ten,
    first: swish_ten_first_derivative,
    second: swish_ten_second_derivative,
    third: swish_ten_third_derivative,
    third_bound: bounds::swish_ten_third_derivative_bound,
    fourth_bound: bounds::swish_ten_fourth_derivative_bound,
};

static SWISH_HUNDRED_SCHEME: TaylorScheme = TaylorScheme {
    value: swish_hundred,
    first: swish_hundred_first_derivative,
    second: swish_hundred_second_derivative,
    third: swish_hundred_third_derivative,
    third_bound: bounds::swish_hundred_third_derivative_bound,
    fourth_bound: bounds::swish_hundred_fourth_derivative_bound,
};

/// Binomial-expand `coef * (x - mid)^degree` into the monomial basis for
/// the variable at `slot`. Each expanded coefficient is wrapped in an
/// outward interval to absorb its rounding error.
fn recentered_term(
    coef: Real,
    mid: Real,
    degree: u32,
    slot: usize,
    num_vars: usize,
) -> Polynomial {
    let mut monomials = Vec::with_capacity(degree as usize + 1);
    let mut binom = 1.0;
    for k in 0..=degree {
        let c = coef * Real::new(binom) * (-mid).powi((degree - k) as i32);
        let mut degrees = vec![0; num_vars];
        degrees[slot] = k;
        monomials.push(Monomial::new(Interval::outward(c), degrees));
        binom = binom * (degree - k) as f64 / (k + 1) as f64;
    }
    Polynomial::new(monomials)
}

fn taylor_reset(
    scheme: &TaylorScheme,
    range: Interval,
    var_ind: usize,
    num_vars: usize,
) -> TaylorModel {
    let mid = range.midpoint();
    let appr = (scheme.value)(mid);

    let coef1 = (scheme.first)(mid);
    let coef2 = (scheme.second)(mid) / Real::new(2.0);
    let coef3 = (scheme.third)(mid) / Real::new(6.0);

    // larger half-width; midpoint rounding can leave the sides uneven
    let max_dev = (Real::new(range.sup()) - mid).max(mid - Real::new(range.inf()));

    let slot = var_ind + 1;
    let mut expansion = Polynomial::from(Monomial::constant(Interval::outward(appr), num_vars));
    expansion += recentered_term(coef1, mid, 1, slot, num_vars);
    expansion += recentered_term(coef2, mid, 2, slot, num_vars);

    let der_bound = (scheme.third_bound)(range);
    let mut remainder = der_bound
        .mul_up(max_dev.pow_up(3))
        .div_up(Real::new(6.0))
        .to_sym_interval();

    // if the uncertainty is too large, use a degree-3 expansion
    if remainder.width() > REMAINDER_WIDTH_LIMIT {
        let der_bound = (scheme.fourth_bound)(range);
        remainder = der_bound
            .mul_up(max_dev.pow_up(4))
            .div_up(Real::new(24.0))
            .to_sym_interval();
        expansion += recentered_term(coef3, mid, 3, slot, num_vars);
    }

    TaylorModel::new(expansion, remainder)
}

/// Enclosure of sigmoid over `range`, in state variable `var_ind`.
pub fn sigmoid_reset(range: Interval, var_ind: usize, num_vars: usize) -> TaylorModel {
    taylor_reset(&SIGMOID_SCHEME, range, var_ind, num_vars)
}

/// Enclosure of tanh over `range`.
pub fn tanh_reset(range: Interval, var_ind: usize, num_vars: usize) -> TaylorModel {
    taylor_reset(&TANH_SCHEME, range, var_ind, num_vars)
}

/// Enclosure of swish (beta = 1) over `range`.
pub fn swish_reset(range: Interval, var_ind: usize, num_vars: usize) -> TaylorModel {
    taylor_reset(&SWISH_SCHEME, range, var_ind, num_vars)
}

/// Enclosure of swish (beta = 10) over `range`.
pub fn swish10_reset(range: Interval, var_ind: usize, num_vars: usize) -> TaylorModel {
    taylor_reset(&SWISH_TEN_SCHEME, range, var_ind, num_vars)
}

/// Enclosure of ReLU over `range`.
///
/// Exact on monotone sub-ranges: zero when `range.sup() < 0`, identity
/// when `range.inf() > 0`. A range straddling zero falls back to the
/// swish (beta = 100) surrogate plus a one-sided correction bounding
/// `relu(x) - swish_hundred(x) >= 0`: evaluated at the range endpoints
/// while the range stays strictly inside the deviation peaks at
/// +-0.0127, and the global deviation bound 0.0028 otherwise.
pub fn relu_reset(range: Interval, var_ind: usize, num_vars: usize) -> TaylorModel {
    if range.sup() < 0.0 {
        return TaylorModel::zero(num_vars);
    }
    if range.inf() > 0.0 {
        return TaylorModel::identity(var_ind, num_vars);
    }

    let mut tm = taylor_reset(&SWISH_HUNDRED_SCHEME, range, var_ind, num_vars);

    let correction = if range.inf() > -DEVIATION_PEAK_INPUT && range.sup() < DEVIATION_PEAK_INPUT {
        let at_inf = -swish_hundred(Real::new(range.inf()));
        let at_sup = Real::new(range.sup()) - swish_hundred(Real::new(range.sup()));
        at_inf.max(at_sup).max(Real::ZERO).round_up()
    } else {
        Real::new(MAX_DEVIATION)
    };
    tm.remainder = tm.remainder + Interval::new(0.0, correction.value());

    debug!(
        input = ?range,
        remainder = ?tm.remainder,
        "relu range straddles zero, using swish surrogate"
    );
    tm
}

/// Enclosure dispatch by activation kind. `Linear` passes the variable
/// through unchanged.
pub fn activation_reset(
    kind: ActivationKind,
    range: Interval,
    var_ind: usize,
    num_vars: usize,
) -> TaylorModel {
    match kind {
        ActivationKind::Linear => TaylorModel::identity(var_ind, num_vars),
        ActivationKind::Sigmoid => sigmoid_reset(range, var_ind, num_vars),
        ActivationKind::Swish => swish_reset(range, var_ind, num_vars),
        ActivationKind::Relu => relu_reset(range, var_ind, num_vars),
        ActivationKind::Tanh => tanh_reset(range, var_ind, num_vars),
    }
}
