//! Property-based soundness tests for the enclosure builders.
//!
//! For any input range and any concrete point inside it, the activation's
//! value must lie in the enclosure's expansion-plus-remainder. A small
//! tolerance covers the floating-point error of evaluating the activation
//! itself; the enclosure arithmetic is rounded outward.

use crate::activation::{sigmoid, swish, swish_ten, tanh};
use crate::reset::{relu_reset, sigmoid_reset, swish10_reset, swish_reset, tanh_reset};
use delta_core::{Interval, Real, TaylorModel};
use proptest::prelude::*;

const FP_TOLERANCE: f64 = 1e-9;

/// Strategy for valid bounds [lower, upper] with lower <= upper.
fn valid_interval(span: f64) -> impl Strategy<Value = (f64, f64)> {
    (-span..span).prop_flat_map(move |a| (-span..span).prop_map(move |b| (a.min(b), a.max(b))))
}

fn sample_points(lower: f64, upper: f64, num_samples: usize) -> Vec<f64> {
    if lower == upper {
        return vec![lower];
    }
    (0..=num_samples)
        .map(|i| {
            let t = i as f64 / num_samples as f64;
            (lower + (upper - lower) * t).clamp(lower, upper)
        })
        .collect()
}

/// Check `truth(x)` is enclosed for every sampled `x` in `[l, u]`.
fn assert_encloses(
    tm: &TaylorModel,
    truth: impl Fn(f64) -> f64,
    l: f64,
    u: f64,
) -> Result<(), TestCaseError> {
    for x in sample_points(l, u, 25) {
        let value = truth(x);
        let enclosed = tm.eval(&[0.0, x]);
        prop_assert!(
            enclosed.inf() - FP_TOLERANCE <= value && value <= enclosed.sup() + FP_TOLERANCE,
            "soundness violation: f({}) = {} not in [{}, {}] over [{}, {}]",
            x,
            value,
            enclosed.inf(),
            enclosed.sup(),
            l,
            u
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn soundness_sigmoid_reset((l, u) in valid_interval(8.0)) {
        let tm = sigmoid_reset(Interval::new(l, u), 0, 2);
        assert_encloses(&tm, |x| sigmoid(Real::new(x)).value(), l, u)?;
    }

    #[test]
    fn soundness_tanh_reset((l, u) in valid_interval(8.0)) {
        let tm = tanh_reset(Interval::new(l, u), 0, 2);
        assert_encloses(&tm, |x| tanh(Real::new(x)).value(), l, u)?;
    }

    #[test]
    fn soundness_swish_reset((l, u) in valid_interval(8.0)) {
        let tm = swish_reset(Interval::new(l, u), 0, 2);
        assert_encloses(&tm, |x| swish(Real::new(x)).value(), l, u)?;
    }

    #[test]
    fn soundness_swish10_reset((l, u) in valid_interval(2.0)) {
        let tm = swish10_reset(Interval::new(l, u), 0, 2);
        assert_encloses(&tm, |x| swish_ten(Real::new(x)).value(), l, u)?;
    }

    #[test]
    fn soundness_relu_reset((l, u) in valid_interval(4.0)) {
        let tm = relu_reset(Interval::new(l, u), 0, 2);
        assert_encloses(&tm, |x| x.max(0.0), l, u)?;
    }

    /// The enclosure stays sound when the target variable sits at a
    /// different slot in a larger degree vector.
    #[test]
    fn soundness_is_slot_independent((l, u) in valid_interval(4.0)) {
        let tm = tanh_reset(Interval::new(l, u), 2, 5);
        for x in sample_points(l, u, 10) {
            let value = tanh(Real::new(x)).value();
            let enclosed = tm.eval(&[0.0, 9.0, -3.0, x, 2.5]);
            prop_assert!(
                enclosed.inf() - FP_TOLERANCE <= value && value <= enclosed.sup() + FP_TOLERANCE
            );
        }
    }
}
