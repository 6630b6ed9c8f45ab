use num_traits::{Float, One, Zero};

use super::point::Point;
use super::{scalar, EPSILON};

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval()
/// or by arc length offset in point_at_length().
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment<P> {
    pub(crate) start: P,
    pub(crate) end: P,
}

impl<P> LineSegment<P>
where
    P: Point,
{
    pub fn new(start: P, end: P) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn eval(&self, t: P::Scalar) -> P {
        self.start.lerp(self.end, t)
    }

    /// Length of the segment. For a line the arc length is exact.
    pub fn length(&self) -> P::Scalar {
        self.start.distance(self.end)
    }

    /// Returns true if start and end coincide (within EPSILON)
    pub fn is_degenerate(&self) -> bool {
        self.length() <= scalar(EPSILON)
    }

    /// Return the point at arc length `distance` from the start.
    /// Offsets outside of [0, length] are clamped onto the segment.
    pub fn point_at_length(&self, distance: P::Scalar) -> P {
        let length = self.length();
        if length <= scalar(EPSILON) {
            return self.start;
        }
        let t = (distance / length)
            .max(P::Scalar::zero())
            .min(P::Scalar::one());
        self.eval(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;

    #[test]
    fn line_segment_interpolation() {
        let line = LineSegment::new(Point2::new(0f64, 1.77f64), Point2::new(4.3f64, 3f64));

        let mid = line.eval(0.5);
        assert!((mid.distance(line.start) - mid.distance(line.end)).abs() < 1e-12);
    }

    #[test]
    fn point_at_length_is_exact_for_lines() {
        // 3-4-5 triangle
        let line = LineSegment::new(Point2::new(0f64, 0f64), Point2::new(3f64, 4f64));
        assert!((line.length() - 5.0).abs() < 1e-12);

        let p = line.point_at_length(2.5);
        assert!(p.distance(Point2::new(1.5, 2.0)) < 1e-12);
    }

    #[test]
    fn point_at_length_clamps() {
        let line = LineSegment::new(Point2::new(1f32, 1f32), Point2::new(1f32, 3f32));
        assert_eq!(line.point_at_length(-1.0), line.start);
        assert_eq!(line.point_at_length(10.0), line.end);
    }

    #[test]
    fn degenerate_segment_stays_at_start() {
        let p = Point2::new(2f64, 2f64);
        let line = LineSegment::new(p, p);
        assert!(line.is_degenerate());
        assert_eq!(line.point_at_length(1.0), p);
    }
}
