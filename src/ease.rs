//! Easing curves: pure shaping functions over normalized progress.
//!
//! An easing curve remaps progress in `[0, 1]` to a shaped output, turning
//! constant-rate ticks into non-linear motion.  Curves are pure and
//! deterministic; outputs may overshoot `[0, 1]` (elastic-style curves do),
//! and downstream consumers must accept that.
//!
//! Inputs outside `[0, 1]` are not part of the contract — the playback
//! policy in [`crate::playback`] normalizes raw progress into range before
//! any curve is invoked.

use serde::{Deserialize, Serialize};

/// A shaping function from normalized progress to a shaped output.
///
/// Implementations must be deterministic and side-effect-free, and defined
/// for every `x` in `[0, 1]`.  The output is *not* required to stay inside
/// `[0, 1]`.
pub trait Ease {
    /// Apply the curve to normalized progress `x` in `[0, 1]`.
    fn apply(&self, x: f64) -> f64;
}

/// Any plain closure is a valid ease, so ad-hoc curves need no named type.
impl<F> Ease for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}

/// The built-in easing curves.
///
/// [`Curve::Linear`] is the identity mapping and the default.  The elastic
/// variants overshoot `[0, 1]` on purpose.  [`Curve::CubicBezier`] evaluates
/// a CSS-like cubic-bezier with control points `(x1, y1)` and `(x2, y2)`
/// (endpoints fixed at `(0, 0)` and `(1, 1)`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Curve {
    /// Identity: output equals input.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Elastic ease-in.  Undershoots below 0 before snapping to 1.
    InElastic,
    /// Elastic ease-out.  Overshoots above 1 before settling.
    OutElastic,
    /// Bouncing ease-out.
    OutBounce,
    /// CSS-style cubic-bezier curve through `(0,0)`, `(x1,y1)`, `(x2,y2)`,
    /// `(1,1)`.  CSS `ease` is `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease for Curve {
    fn apply(&self, x: f64) -> f64 {
        match *self {
            Curve::Linear => x,
            Curve::InQuad => x * x,
            Curve::OutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Curve::InOutQuad => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
                }
            }
            Curve::InCubic => x * x * x,
            Curve::OutCubic => 1.0 - (1.0 - x).powi(3),
            Curve::InOutCubic => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
            Curve::InElastic => {
                const C4: f64 = std::f64::consts::TAU / 3.0;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    -(2f64.powf(10.0 * x - 10.0)) * ((x * 10.0 - 10.75) * C4).sin()
                }
            }
            Curve::OutElastic => {
                const C4: f64 = std::f64::consts::TAU / 3.0;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    2f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
            Curve::OutBounce => out_bounce(x),
            Curve::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x, x1, y1, x2, y2),
        }
    }
}

/// Piecewise-parabola bounce (the classic `n1 = 7.5625`, `d1 = 2.75` form).
fn out_bounce(x: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        let x = x - 1.5 / D1;
        N1 * x * x + 0.75
    } else if x < 2.5 / D1 {
        let x = x - 2.25 / D1;
        N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / D1;
        N1 * x * x + 0.984375
    }
}

//  Cubic bezier

/// Evaluate a CSS-like cubic-bezier easing at input `u` in `[0, 1]`.
///
/// Control points are `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.  The curve is
/// parametric, so `u` (the x-coordinate) is first resolved to the parameter
/// `t` with Newton–Raphson, falling back to bisection when the derivative
/// degenerates; the result is the y-coordinate at that `t`.
fn cubic_bezier(u: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    // Polynomial coefficients with endpoints fixed at (0,0) and (1,1):
    // B(t) = ((a*t + b)*t + c)*t
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let u = u.clamp(0.0, 1.0);
    let t = solve_t_for_x(u, ax, bx, cx);
    sample_curve(ay, by, cy, t)
}

#[inline]
fn sample_curve(a: f64, b: f64, c: f64, t: f64) -> f64 {
    ((a * t + b) * t + c) * t
}

/// Solve `x(t) = u` for `t` in `[0, 1]`.
fn solve_t_for_x(u: f64, ax: f64, bx: f64, cx: f64) -> f64 {
    // Newton-Raphson with u as the initial guess.
    let mut t = u;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - u;
        if x.abs() < 1e-7 {
            return t;
        }
        let dx = (3.0 * ax * t + 2.0 * bx) * t + cx;
        if dx.abs() < 1e-7 {
            break; // fallback to bisection
        }
        t -= x / dx;
        if !(0.0..=1.0).contains(&t) {
            break; // fallback to bisection
        }
    }

    // Bisection fallback (robust: x(t) is monotone on [0, 1]).
    let mut lo = 0.0;
    let mut hi = 1.0;
    t = u;
    for _ in 0..32 {
        let x = sample_curve(ax, bx, cx, t);
        if (x - u).abs() < 1e-8 {
            return t;
        }
        if x < u {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    t
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "expected {b}, got {a}");
    }

    #[test]
    fn linear_is_identity_over_unit_interval() {
        for i in 0..=10 {
            let x = i as f64 / 10.0;
            assert_close(Curve::Linear.apply(x), x);
        }
    }

    #[test]
    fn default_curve_is_linear() {
        assert_eq!(Curve::default(), Curve::Linear);
    }

    #[test]
    fn quad_and_cubic_midpoints() {
        assert_close(Curve::InQuad.apply(0.5), 0.25);
        assert_close(Curve::OutQuad.apply(0.5), 0.75);
        assert_close(Curve::InOutQuad.apply(0.5), 0.5);
        assert_close(Curve::InCubic.apply(0.5), 0.125);
        assert_close(Curve::OutCubic.apply(0.5), 0.875);
        assert_close(Curve::InOutCubic.apply(0.5), 0.5);
    }

    #[test]
    fn every_curve_hits_both_endpoints() {
        let curves = [
            Curve::Linear,
            Curve::InQuad,
            Curve::OutQuad,
            Curve::InOutQuad,
            Curve::InCubic,
            Curve::OutCubic,
            Curve::InOutCubic,
            Curve::InElastic,
            Curve::OutElastic,
            Curve::OutBounce,
            Curve::CubicBezier {
                x1: 0.25,
                y1: 0.1,
                x2: 0.25,
                y2: 1.0,
            },
        ];
        for curve in curves {
            assert!(
                curve.apply(0.0).abs() < 1e-5,
                "{curve:?} should start at 0"
            );
            assert!(
                (curve.apply(1.0) - 1.0).abs() < 1e-5,
                "{curve:?} should end at 1"
            );
        }
    }

    #[test]
    fn out_elastic_overshoots_above_one() {
        let overshoot = (1..100)
            .map(|i| Curve::OutElastic.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(overshoot > 1.0, "elastic must overshoot, peak {overshoot}");
    }

    #[test]
    fn bezier_with_linear_control_points_is_identity() {
        let bezier = Curve::CubicBezier {
            x1: 1.0 / 3.0,
            y1: 1.0 / 3.0,
            x2: 2.0 / 3.0,
            y2: 2.0 / 3.0,
        };
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert!(
                (bezier.apply(x) - x).abs() < 1e-5,
                "linear bezier should match identity at {x}"
            );
        }
    }

    #[test]
    fn css_ease_is_monotone_increasing() {
        let ease = Curve::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        };
        let mut prev = ease.apply(0.0);
        for i in 1..=50 {
            let next = ease.apply(i as f64 / 50.0);
            assert!(next >= prev, "css ease must be monotone");
            prev = next;
        }
    }

    #[test]
    fn closures_implement_ease() {
        let flipped = |x: f64| 1.0 - x;
        assert_close(flipped.apply(0.25), 0.75);
    }

    #[test]
    fn curve_serde_round_trip() {
        let curves = [
            Curve::Linear,
            Curve::OutElastic,
            Curve::CubicBezier {
                x1: 0.25,
                y1: 0.1,
                x2: 0.25,
                y2: 1.0,
            },
        ];
        for curve in curves {
            let json = serde_json::to_string(&curve).unwrap();
            let back: Curve = serde_json::from_str(&json).unwrap();
            assert_eq!(curve, back);
        }
    }
}
