//! Easing curves mapping elapsed time fractions to progress fractions.

use num_traits::Float;

use super::cubic_bezier::CubicBezier;
use super::find_root::FindRoot;
use super::point2::Point2;
use super::{clamp_fraction, scalar};

/// An easing curve: maps an input fraction in [0, 1] to an output fraction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Identity, constant velocity.
    #[default]
    Linear,
    /// Quadratic ease-in, `t²`.
    Accelerate,
    /// CSS style `cubic-bezier(x1, y1, x2, y2)` with implicit end points
    /// (0, 0) and (1, 1). `x1` and `x2` must lie in [0, 1] for the curve to be
    /// a function of time.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Steep ease-in used for drawing the check mark and the ring.
    pub const STROKE: Easing = Easing::CubicBezier {
        x1: 0.755,
        y1: 0.05,
        x2: 0.855,
        y2: 0.06,
    };

    /// Material fast-out-slow-in, used for the scale pulse.
    pub const FAST_OUT_SLOW_IN: Easing = Easing::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// Map `fraction` (clamped into [0, 1]) through the curve.
    /// The end points always map onto themselves.
    pub fn ease<F>(&self, fraction: F) -> F
    where
        F: Float + From<f32> + Default,
    {
        let x = clamp_fraction(fraction);
        if x <= F::zero() {
            return F::zero();
        }
        if x >= F::one() {
            return F::one();
        }

        match *self {
            Easing::Linear => x,
            Easing::Accelerate => x * x,
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                let curve = CubicBezier::new(
                    Point2::new(F::zero(), F::zero()),
                    Point2::new(scalar(f64::from(x1.clamp(0.0, 1.0))), scalar(f64::from(y1))),
                    Point2::new(scalar(f64::from(x2.clamp(0.0, 1.0))), scalar(f64::from(y2))),
                    Point2::new(F::one(), F::one()),
                );
                let t = match curve.root_newton_axis(x, 0, x, None, None) {
                    Ok(t) => t,
                    Err(err) => {
                        log::trace!("newton inversion failed ({}), bisecting", err);
                        match curve.root_bisect_axis(x, 0, None, None) {
                            Ok(t) => t,
                            Err(err) => {
                                log::trace!("bisection failed ({}), using linear time", err);
                                x
                            }
                        }
                    }
                };
                curve.axis(t, 1)
            }
        }
    }
}
