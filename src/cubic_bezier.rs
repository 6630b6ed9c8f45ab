use num_traits::{One, Zero};

use super::find_root::FindRoot;
use super::point::Point;
use super::roots::RootFindingError;
use super::scalar;

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start.lerp(self.ctrl1, t);
        let ctrl_1bc = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl_1cd = self.ctrl2.lerp(self.end, t);
        // second iteration
        let ctrl_2ab = ctrl_1ab.lerp(ctrl_1bc, t);
        let ctrl_2bc = ctrl_1bc.lerp(ctrl_1cd, t);
        // third iteration, final point on the curve
        ctrl_2ab.lerp(ctrl_2bc, t)
    }

    /// Sample the coordinate at `axis` of the curve at t.
    /// Convenience shortcut for bezier.eval(t).axis(axis)
    pub fn axis(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        let three = scalar::<P::Scalar>(3.0);
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = P::Scalar::one() - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        one_t3 * self.start.axis(axis)
            + one_t2 * t * self.ctrl1.axis(axis) * three
            + one_t * t2 * self.ctrl2.axis(axis) * three
            + t3 * self.end.axis(axis)
    }

    /// Direct Derivative - Sample the axis coordinate at 'axis' of the curve's derivative at t.
    /// Parameters:
    /// t: the sampling parameter on the curve interval [0..1]
    /// axis: the index of the coordinate axis [0..N]
    pub fn dd(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        let three = scalar::<P::Scalar>(3.0);
        let six = scalar::<P::Scalar>(6.0);
        let one_t = P::Scalar::one() - t;
        let d0 = self.ctrl1.axis(axis) - self.start.axis(axis);
        let d1 = self.ctrl2.axis(axis) - self.ctrl1.axis(axis);
        let d2 = self.end.axis(axis) - self.ctrl2.axis(axis);

        three * one_t * one_t * d0 + six * one_t * t * d1 + three * t * t * d2
    }
}

impl<P> FindRoot<P> for CubicBezier<P>
where
    P: Point,
{
    fn parameter_domain(&self) -> (P::Scalar, P::Scalar) {
        (P::Scalar::zero(), P::Scalar::one())
    }

    fn axis_value(&self, t: P::Scalar, axis: usize) -> Result<P::Scalar, RootFindingError> {
        Ok(self.axis(t, axis))
    }

    fn axis_derivative(&self, t: P::Scalar, axis: usize) -> Result<P::Scalar, RootFindingError> {
        Ok(self.dd(t, axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;

    fn curve() -> CubicBezier<Point2<f64>> {
        CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(1.1, -1.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        )
    }

    #[test]
    fn axis_matches_casteljau() {
        let bezier = curve();
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let p = bezier.eval(t);
            assert!((bezier.axis(t, 0) - p.x()).abs() < 1e-9);
            assert!((bezier.axis(t, 1) - p.y()).abs() < 1e-9);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let bezier = curve();
        let h = 1e-6;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let numeric = (bezier.axis(t + h, 0) - bezier.axis(t - h, 0)) / (2.0 * h);
            assert!((bezier.dd(t, 0) - numeric).abs() < 1e-5);
        }
    }

    #[test]
    fn newton_solves_axis_value() {
        // monotone in x
        let bezier = CubicBezier::new(
            Point2::new(0.0f64, 0.0),
            Point2::new(0.4, 0.0),
            Point2::new(0.2, 1.0),
            Point2::new(1.0, 1.0),
        );
        for i in 1..10 {
            let x = i as f64 / 10.0;
            let t = bezier.root_newton_axis(x, 0, x, None, None).unwrap();
            assert!((bezier.axis(t, 0) - x).abs() < 1e-6);
            let tb = bezier.root_bisect_axis(x, 0, None, None).unwrap();
            assert!((t - tb).abs() < 1e-4);
        }
    }
}
