//! Rigorous bounds on third/fourth derivative magnitudes over a range.
//!
//! Each derivative's magnitude is piecewise well-behaved in regions around
//! its extrema, derived analytically offline and hard-coded here as data
//! tables so the soundness property can be tested independently of control
//! flow. Two table shapes:
//!
//! - [`RegionTable`] (sigmoid, tanh): ordered regions covering the real
//!   line. An `Endpoint` region is one where |derivative| attains its
//!   maximum over any sub-interval at a sub-interval endpoint (no interior
//!   local maximum); a `Peak` region is a narrow transition window carrying
//!   a precomputed conservative constant. The bound over a query range is
//!   the maximum contribution of every region the range intersects.
//! - [`BandTable`] (swish family): symmetric |x|-bands with conservative
//!   peak constants. No analytic extremum derivation exists for these;
//!   the published thresholds are reproduced as a black-box lookup table.
//!
//! Every function here guarantees
//! `bound(range) >= max |derivative(x)|` for all `x` in `range`.

use crate::derivative::{sigmoid_derivative, tanh_derivative};
use delta_core::{Interval, Real};

enum RegionKind {
    /// |derivative| has no interior local maximum: evaluate at the
    /// clamped endpoints of the intersection.
    Endpoint,
    /// Precomputed conservative peak constant.
    Peak(f64),
}

struct Region {
    lo: f64,
    hi: f64,
    kind: RegionKind,
}

struct RegionTable {
    regions: &'static [Region],
    derivative: fn(Real) -> Real,
}

impl RegionTable {
    fn bound(&self, range: Interval) -> Real {
        let (a, b) = (range.inf(), range.sup());
        let mut best = Real::ZERO;
        for region in self.regions {
            if region.lo > b || region.hi < a {
                continue;
            }
            match region.kind {
                RegionKind::Peak(peak) => best = best.max(Real::new(peak)),
                RegionKind::Endpoint => {
                    let lo = a.max(region.lo);
                    let hi = b.min(region.hi);
                    best = best.max((self.derivative)(Real::new(lo)).abs());
                    best = best.max((self.derivative)(Real::new(hi)).abs());
                }
            }
        }
        best
    }
}

struct Band {
    radius: f64,
    peak: f64,
}

struct BandTable {
    bands: &'static [Band],
    tail: f64,
}

impl BandTable {
    fn bound(&self, range: Interval) -> Real {
        // |x| over the range spans [nearest, farthest]
        let nearest = if range.inf() > 0.0 {
            range.inf()
        } else if range.sup() < 0.0 {
            -range.sup()
        } else {
            0.0
        };
        let farthest = range.inf().abs().max(range.sup().abs());

        let mut best = Real::ZERO;
        let mut inner = 0.0;
        for band in self.bands {
            if nearest <= band.radius && farthest >= inner {
                best = best.max(Real::new(band.peak));
            }
            inner = band.radius;
        }
        if farthest > inner {
            best = best.max(Real::new(self.tail));
        }
        best
    }
}

fn sig3(x: Real) -> Real {
    sigmoid_derivative(3, x)
}

fn sig4(x: Real) -> Real {
    sigmoid_derivative(4, x)
}

fn tanh3(x: Real) -> Real {
    tanh_derivative(3, x)
}

fn tanh4(x: Real) -> Real {
    tanh_derivative(4, x)
}

// sigmoid''' extrema: 0.125 at the origin (bounded by 0.126), 0.0417
// near +-2.29; zero crossings leave the inner regions V-shaped.
static SIGMOID_THIRD: RegionTable = RegionTable {
    regions: &[
        Region { lo: f64::NEG_INFINITY, hi: -2.3, kind: RegionKind::Endpoint },
        Region { lo: -2.3, hi: -2.28, kind: RegionKind::Peak(0.0417) },
        Region { lo: -2.28, hi: 0.0, kind: RegionKind::Endpoint },
        Region { lo: 0.0, hi: 0.0, kind: RegionKind::Peak(0.126) },
        Region { lo: 0.0, hi: 2.28, kind: RegionKind::Endpoint },
        Region { lo: 2.28, hi: 2.3, kind: RegionKind::Peak(0.0417) },
        Region { lo: 2.3, hi: f64::INFINITY, kind: RegionKind::Endpoint },
    ],
    derivative: sig3,
};

// sigmoid'''' extrema: 0.1277 near +-0.84, 0.01908 near +-3.14.
static SIGMOID_FOURTH: RegionTable = RegionTable {
    regions: &[
        Region { lo: f64::NEG_INFINITY, hi: -3.15, kind: RegionKind::Endpoint },
        Region { lo: -3.15, hi: -3.13, kind: RegionKind::Peak(0.01908) },
        Region { lo: -3.13, hi: -0.85, kind: RegionKind::Endpoint },
        Region { lo: -0.85, hi: -0.83, kind: RegionKind::Peak(0.1277) },
        Region { lo: -0.83, hi: 0.83, kind: RegionKind::Endpoint },
        Region { lo: 0.83, hi: 0.85, kind: RegionKind::Peak(0.1277) },
        Region { lo: 0.85, hi: 3.13, kind: RegionKind::Endpoint },
        Region { lo: 3.13, hi: 3.15, kind: RegionKind::Peak(0.01908) },
        Region { lo: 3.15, hi: f64::INFINITY, kind: RegionKind::Endpoint },
    ],
    derivative: sig4,
};

// tanh''' extrema: exactly 2 at the origin, 0.66667 near +-1.146.
static TANH_THIRD: RegionTable = RegionTable {
    regions: &[
        Region { lo: f64::NEG_INFINITY, hi: -1.147, kind: RegionKind::Endpoint },
        Region { lo: -1.147, hi: -1.145, kind: RegionKind::Peak(0.66667) },
        Region { lo: -1.145, hi: 0.0, kind: RegionKind::Endpoint },
        Region { lo: 0.0, hi: 0.0, kind: RegionKind::Peak(2.0) },
        Region { lo: 0.0, hi: 1.145, kind: RegionKind::Endpoint },
        Region { lo: 1.145, hi: 1.147, kind: RegionKind::Peak(0.66667) },
        Region { lo: 1.147, hi: f64::INFINITY, kind: RegionKind::Endpoint },
    ],
    derivative: tanh3,
};

// tanh'''' extrema: 4.0859 near +-0.421, 0.61009 near +-1.572.
static TANH_FOURTH: RegionTable = RegionTable {
    regions: &[
        Region { lo: f64::NEG_INFINITY, hi: -1.573, kind: RegionKind::Endpoint },
        Region { lo: -1.573, hi: -1.571, kind: RegionKind::Peak(0.61009) },
        Region { lo: -1.571, hi: -0.422, kind: RegionKind::Endpoint },
        Region { lo: -0.422, hi: -0.42, kind: RegionKind::Peak(4.0859) },
        Region { lo: -0.42, hi: 0.42, kind: RegionKind::Endpoint },
        Region { lo: 0.42, hi: 0.422, kind: RegionKind::Peak(4.0859) },
        Region { lo: 0.422, hi: 1.571, kind: RegionKind::Endpoint },
        Region { lo: 1.571, hi: 1.573, kind: RegionKind::Peak(0.61009) },
        Region { lo: 1.573, hi: f64::INFINITY, kind: RegionKind::Endpoint },
    ],
    derivative: tanh4,
};

static SWISH_THIRD: BandTable = BandTable {
    bands: &[
        Band { radius: 3.0, peak: 0.31 },
        Band { radius: 5.0, peak: 0.025 },
    ],
    tail: 0.013,
};

// swish'''' reaches 0.5 at the origin (4 * sigmoid'''(0)) and 0.178 just
// past 2.2.
static SWISH_FOURTH: BandTable = BandTable {
    bands: &[
        Band { radius: 2.2, peak: 0.51 },
        Band { radius: 6.0, peak: 0.18 },
    ],
    tail: 0.013,
};

static SWISH_TEN_THIRD: BandTable = BandTable {
    bands: &[
        Band { radius: 0.3, peak: 30.9 },
        Band { radius: 0.91, peak: 2.6 },
    ],
    tail: 0.07,
};

static SWISH_TEN_FOURTH: BandTable = BandTable {
    bands: &[
        Band { radius: 0.071, peak: 500.0 },
        Band { radius: 0.4, peak: 204.0 },
        Band { radius: 1.2, peak: 10.0 },
    ],
    tail: 0.05,
};

static SWISH_HUNDRED_THIRD: BandTable = BandTable {
    bands: &[
        Band { radius: 0.2, peak: 7400.0 },
        Band { radius: 0.5, peak: 8800.0 },
        Band { radius: 0.8, peak: 3000.0 },
        Band { radius: 1.2, peak: 260.0 },
    ],
    tail: 7.5,
};

// swish_hundred''''(x) = 10^6 * swish''''(100x), so the inner bands are
// the beta = 10 table's scaled by 10 in x and 1000 in magnitude; the
// negative lobe near |x| = 0.054 peaks at 5245.
static SWISH_HUNDRED_FOURTH: BandTable = BandTable {
    bands: &[
        Band { radius: 0.0071, peak: 500000.0 },
        Band { radius: 0.045, peak: 204000.0 },
        Band { radius: 0.12, peak: 5300.0 },
        Band { radius: 0.17, peak: 50.0 },
    ],
    tail: 0.55,
};

/// Conservative bound on `max |sigmoid'''(x)|` over `range`.
pub fn sigmoid_third_derivative_bound(range: Interval) -> Real {
    SIGMOID_THIRD.bound(range)
}

/// Conservative bound on `max |sigmoid''''(x)|` over `range`.
pub fn sigmoid_fourth_derivative_bound(range: Interval) -> Real {
    SIGMOID_FOURTH.bound(range)
}

/// Conservative bound on `max |tanh'''(x)|` over `range`.
pub fn tanh_third_derivative_bound(range: Interval) -> Real {
    TANH_THIRD.bound(range)
}

/// Conservative bound on `max |tanh''''(x)|` over `range`.
pub fn tanh_fourth_derivative_bound(range: Interval) -> Real {
    TANH_FOURTH.bound(range)
}

pub fn swish_third_derivative_bound(range: Interval) -> Real {
    SWISH_THIRD.bound(range)
}

pub fn swish_fourth_derivative_bound(range: Interval) -> Real {
    SWISH_FOURTH.bound(range)
}

pub fn swish_ten_third_derivative_bound(range: Interval) -> Real {
    SWISH_TEN_THIRD.bound(range)
}

pub fn swish_ten_fourth_derivative_bound(range: Interval) -> Real {
    SWISH_TEN_FOURTH.bound(range)
}

pub fn swish_hundred_third_derivative_bound(range: Interval) -> Real {
    SWISH_HUNDRED_THIRD.bound(range)
}

pub fn swish_hundred_fourth_derivative_bound(range: Interval) -> Real {
    SWISH_HUNDRED_FOURTH.bound(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivative::{
        swish_hundred_third_derivative, swish_ten_third_derivative, swish_third_derivative,
    };

    fn check_dominates(
        bound: fn(Interval) -> Real,
        derivative: fn(Real) -> Real,
        range: Interval,
    ) {
        let b = bound(range).value();
        let n = 200;
        for i in 0..=n {
            let x = range.inf() + range.width() * i as f64 / n as f64;
            let d = derivative(Real::new(x)).abs().value();
            assert!(
                b >= d,
                "bound {} < |derivative({})| = {} on [{}, {}]",
                b,
                x,
                d,
                range.inf(),
                range.sup()
            );
        }
    }

    fn ranges() -> Vec<Interval> {
        vec![
            Interval::new(-0.1, 0.1),
            Interval::new(-1.0, 1.0),
            Interval::new(-4.0, 4.0),
            Interval::new(0.5, 0.9),
            Interval::new(-0.9, -0.5),
            Interval::new(2.0, 6.0),
            Interval::new(-6.0, -2.0),
            Interval::new(3.2, 8.0),
            // straddle the published region boundaries
            Interval::new(-0.84, 0.84),
            Interval::new(0.83, 0.85),
            Interval::new(2.28, 2.32),
            Interval::new(-3.14, -3.12),
            Interval::new(1.144, 1.148),
            Interval::new(0.419, 0.423),
            Interval::new(1.57, 1.58),
            Interval::new(-8.0, 8.0),
        ]
    }

    #[test]
    fn sigmoid_third_bound_dominates_sampled_magnitudes() {
        for r in ranges() {
            check_dominates(sigmoid_third_derivative_bound, |x| sigmoid_derivative(3, x), r);
        }
    }

    #[test]
    fn sigmoid_fourth_bound_dominates_sampled_magnitudes() {
        for r in ranges() {
            check_dominates(sigmoid_fourth_derivative_bound, |x| sigmoid_derivative(4, x), r);
        }
    }

    #[test]
    fn tanh_third_bound_dominates_sampled_magnitudes() {
        for r in ranges() {
            check_dominates(tanh_third_derivative_bound, |x| tanh_derivative(3, x), r);
        }
    }

    #[test]
    fn tanh_fourth_bound_dominates_sampled_magnitudes() {
        for r in ranges() {
            check_dominates(tanh_fourth_derivative_bound, |x| tanh_derivative(4, x), r);
        }
    }

    // fourth derivatives of the swish family, from
    // swish_b''''(x) = 4 b^3 sigmoid'''(bx) + b^4 x sigmoid''''(bx)
    fn swish_fourth_derivative(x: Real) -> Real {
        Real::new(4.0) * sigmoid_derivative(3, x) + x * sigmoid_derivative(4, x)
    }

    fn swish_ten_fourth_derivative(x: Real) -> Real {
        let bx = Real::new(10.0) * x;
        Real::new(4000.0) * sigmoid_derivative(3, bx)
            + Real::new(10000.0) * x * sigmoid_derivative(4, bx)
    }

    fn swish_hundred_fourth_derivative(x: Real) -> Real {
        let bx = Real::new(100.0) * x;
        Real::new(4.0e6) * sigmoid_derivative(3, bx)
            + Real::new(1.0e8) * x * sigmoid_derivative(4, bx)
    }

    #[test]
    fn swish_third_bound_dominates_sampled_magnitudes() {
        let mut all = ranges();
        all.extend([
            Interval::new(2.9, 3.1),
            Interval::new(3.05, 3.3),
            Interval::new(4.9, 5.1),
            Interval::new(5.1, 7.0),
        ]);
        for r in all {
            check_dominates(swish_third_derivative_bound, swish_third_derivative, r);
        }
    }

    #[test]
    fn swish_fourth_bound_dominates_sampled_magnitudes() {
        let mut all = ranges();
        all.extend([
            Interval::new(2.21, 2.5),
            Interval::new(5.9, 6.1),
            Interval::new(6.5, 9.0),
        ]);
        for r in all {
            check_dominates(swish_fourth_derivative_bound, swish_fourth_derivative, r);
        }
    }

    #[test]
    fn swish_ten_bounds_dominate_sampled_magnitudes() {
        for r in [
            Interval::new(-0.01, 0.01),
            Interval::new(-0.105, 0.105),
            Interval::new(-0.4, 0.4),
            Interval::new(0.25, 0.35),
            Interval::new(0.4, 0.6),
            Interval::new(0.85, 0.95),
            Interval::new(1.0, 2.0),
            Interval::new(-0.95, -0.85),
            Interval::new(-2.0, 2.0),
        ] {
            check_dominates(
                swish_ten_third_derivative_bound,
                swish_ten_third_derivative,
                r,
            );
        }
        for r in [
            Interval::new(-0.005, 0.005),
            Interval::new(-0.071, 0.071),
            Interval::new(0.05, 0.09),
            Interval::new(0.08, 0.2),
            Interval::new(0.3, 0.5),
            Interval::new(-0.5, -0.3),
            Interval::new(1.0, 1.4),
            Interval::new(1.15, 1.25),
            Interval::new(1.3, 3.0),
            Interval::new(-2.0, 2.0),
        ] {
            check_dominates(
                swish_ten_fourth_derivative_bound,
                swish_ten_fourth_derivative,
                r,
            );
        }
    }

    #[test]
    fn swish_hundred_bounds_dominate_sampled_magnitudes() {
        for r in [
            Interval::new(-0.001, 0.001),
            Interval::new(-0.02, 0.02),
            Interval::new(0.19, 0.23),
            Interval::new(0.25, 0.45),
            Interval::new(-0.3, 0.1),
            Interval::new(0.6, 0.7),
            Interval::new(0.9, 1.1),
            Interval::new(1.5, 2.0),
        ] {
            check_dominates(
                swish_hundred_third_derivative_bound,
                swish_hundred_third_derivative,
                r,
            );
        }
        for r in [
            Interval::new(-0.0005, 0.0005),
            Interval::new(-0.0071, 0.0071),
            Interval::new(0.005, 0.009),
            Interval::new(0.0072, 0.02),
            Interval::new(-0.02, -0.0072),
            Interval::new(0.03, 0.045),
            Interval::new(0.046, 0.12),
            Interval::new(0.05, 0.06),
            Interval::new(0.13, 0.16),
            Interval::new(0.2, 0.5),
        ] {
            check_dominates(
                swish_hundred_fourth_derivative_bound,
                swish_hundred_fourth_derivative,
                r,
            );
        }
    }

    #[test]
    fn swish_bounds_reproduce_published_constants() {
        // ranges touching the origin take the central constant
        assert_eq!(
            swish_third_derivative_bound(Interval::new(-0.5, 2.0)).value(),
            0.31
        );
        assert_eq!(
            swish_fourth_derivative_bound(Interval::new(-1.0, 1.0)).value(),
            0.51
        );
        // ranges past the last threshold take the tail constant
        assert_eq!(
            swish_third_derivative_bound(Interval::new(6.0, 9.0)).value(),
            0.013
        );
        assert_eq!(
            swish_ten_third_derivative_bound(Interval::new(-2.0, -1.0)).value(),
            0.07
        );
        // a one-sided range in an intermediate band
        assert_eq!(
            swish_third_derivative_bound(Interval::new(3.5, 4.5)).value(),
            0.025
        );
        assert_eq!(
            swish_ten_fourth_derivative_bound(Interval::new(0.1, 0.3)).value(),
            204.0
        );
        assert_eq!(
            swish_hundred_fourth_derivative_bound(Interval::new(-0.002, 0.001)).value(),
            500000.0
        );
        assert_eq!(
            swish_hundred_third_derivative_bound(Interval::new(1.5, 2.0)).value(),
            7.5
        );
    }

    #[test]
    fn swish_bounds_take_max_over_spanned_bands() {
        // [-0.1, 0.4] spans the central band (7400) and the 0.2..0.5 band
        // (8800); the larger peak wins
        assert_eq!(
            swish_hundred_third_derivative_bound(Interval::new(-0.1, 0.4)).value(),
            8800.0
        );
        // a wide range over all swish10 bands keeps the central peak
        assert_eq!(
            swish_ten_fourth_derivative_bound(Interval::new(-3.0, 3.0)).value(),
            500.0
        );
    }

    #[test]
    fn region_bounds_are_at_least_endpoint_and_midpoint_magnitudes() {
        // the inclusion-monotonicity property does not hold in general;
        // what must hold is dominance at the sampled points of any range
        for r in ranges() {
            for (bound, order, der) in [
                (
                    sigmoid_third_derivative_bound as fn(Interval) -> Real,
                    3,
                    sigmoid_derivative as fn(u32, Real) -> Real,
                ),
                (sigmoid_fourth_derivative_bound, 4, sigmoid_derivative),
                (tanh_third_derivative_bound, 3, tanh_derivative),
                (tanh_fourth_derivative_bound, 4, tanh_derivative),
            ] {
                let b = bound(r).value();
                for x in [r.inf(), r.midpoint().value(), r.sup()] {
                    assert!(b >= der(order, Real::new(x)).abs().value());
                }
            }
        }
    }
}
