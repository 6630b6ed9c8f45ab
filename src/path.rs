use num_traits::Zero;
use tinyvec::ArrayVec;

use super::line::LineSegment;
use super::point::Point;

/// A path composed of up to N connected straight segments, measurable by arc length.
pub struct LinePath<P, const N: usize>
where
    P: Point,
    [LineSegment<P>; N]: tinyvec::Array<Item = LineSegment<P>>,
{
    segments: ArrayVec<[LineSegment<P>; N]>,
}

impl<P, const N: usize> LinePath<P, N>
where
    P: Point,
    [LineSegment<P>; N]: tinyvec::Array<Item = LineSegment<P>>,
{
    pub fn new() -> Self {
        LinePath {
            segments: ArrayVec::new(),
        }
    }

    /// Build a path through consecutive `points`. Points that do not fit
    /// into the segment capacity are ignored.
    pub fn from_points(points: &[P]) -> Self {
        let mut path = Self::new();
        for pair in points.windows(2) {
            if !path.push_line(LineSegment::new(pair[0], pair[1])) {
                break;
            }
        }
        path
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.len() == 0
    }

    pub fn push_line(&mut self, segment: LineSegment<P>) -> bool {
        if self.segments.len() < self.segments.capacity() {
            self.segments.push(segment);
            true
        } else {
            false
        }
    }

    /// Total arc length of all segments.
    pub fn length(&self) -> P::Scalar {
        self.segments
            .iter()
            .fold(P::Scalar::zero(), |acc, segment| acc + segment.length())
    }

    /// Return the point at arc length `distance` from the start of the path.
    /// Walks the segments accumulating their lengths until `distance` falls
    /// inside the current one, then interpolates within it.
    /// Offsets beyond the total length clamp to the final point, offsets below
    /// zero to the first point. Returns None for empty paths.
    pub fn point_at_length(&self, distance: P::Scalar) -> Option<P> {
        let first = self.segments.first()?;
        if !(distance > P::Scalar::zero()) {
            return Some(first.start);
        }

        let mut travelled = P::Scalar::zero();
        for segment in self.segments.iter() {
            let length = segment.length();
            if distance <= travelled + length {
                return Some(segment.point_at_length(distance - travelled));
            }
            travelled = travelled + length;
        }

        self.segments.last().map(|segment| segment.end)
    }
}

impl<P, const N: usize> Default for LinePath<P, N>
where
    P: Point,
    [LineSegment<P>; N]: tinyvec::Array<Item = LineSegment<P>>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;

    fn corner() -> LinePath<Point2<f64>, 4> {
        LinePath::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 2.0),
        ])
    }

    #[test]
    fn line_path_length() {
        let path = corner();
        assert_eq!(path.len(), 2);
        assert!((path.length() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn line_path_point_at_length_walks_segments() {
        let path = corner();

        let p0 = path.point_at_length(0.0).unwrap();
        assert_eq!(p0, Point2::new(0.0, 0.0));

        let p1 = path.point_at_length(0.5).unwrap();
        assert!(p1.distance(Point2::new(0.5, 0.0)) < 1e-12);

        // exactly on the joint
        let p2 = path.point_at_length(1.0).unwrap();
        assert!(p2.distance(Point2::new(1.0, 0.0)) < 1e-12);

        let p3 = path.point_at_length(2.0).unwrap();
        assert!(p3.distance(Point2::new(1.0, 1.0)) < 1e-12);
    }

    #[test]
    fn line_path_clamps_out_of_range() {
        let path = corner();

        let start = path.point_at_length(-1.0).unwrap();
        assert_eq!(start, Point2::new(0.0, 0.0));

        let end = path.point_at_length(42.0).unwrap();
        assert_eq!(end, Point2::new(1.0, 2.0));
    }

    #[test]
    fn line_path_capacity() {
        let mut path: LinePath<Point2<f64>, 1> = LinePath::new();
        let first = path.push_line(LineSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        ));
        let second = path.push_line(LineSegment::new(
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ));

        assert!(first);
        assert!(!second);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn empty_path_has_no_points() {
        let path: LinePath<Point2<f64>, 2> = LinePath::default();
        assert!(path.is_empty());
        assert!(path.point_at_length(1.0).is_none());
    }
}
