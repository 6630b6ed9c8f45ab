//! Check mark geometry and its arc-length parameterized partial paths.
//!
//! The check mark is a polyline `start -> pivot -> end` placed inside a
//! drawing rectangle at fixed fractional offsets. The short leg runs from
//! `start` down to `pivot`, the long leg from `pivot` up to `end`.

use core::ops::Deref;

use num_traits::Float;
use tinyvec::ArrayVec;

use super::path::LinePath;
use super::point::Point;
use super::point2::Point2;
use super::rect::Rect;
use super::{clamp_fraction, scalar, EPSILON};

/// Anchor offsets as (width, height) fractions of the drawing rectangle.
const START: (f64, f64) = (0.25, 0.5);
const PIVOT: (f64, f64) = (0.426, 0.66);
const END: (f64, f64) = (0.75, 0.30);

/// The visible part of a stroked shape at some fraction: a polyline of up to three points.
///
/// An empty path draws nothing, a single point marks where drawing starts
/// but has no visible extent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialPath<P>
where
    P: Point,
{
    points: ArrayVec<[P; 3]>,
}

impl<P> PartialPath<P>
where
    P: Point,
{
    pub fn empty() -> Self {
        PartialPath {
            points: ArrayVec::new(),
        }
    }

    /// Build from at most three points; additional points are dropped.
    pub fn from_points(points: &[P]) -> Self {
        let mut path = Self::empty();
        for point in points.iter().take(3) {
            path.points.push(*point);
        }
        path
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Returns true if the path has visible extent, i.e. at least one segment.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// The point the stroke has advanced to.
    pub fn head(&self) -> Option<P> {
        self.points.last().copied()
    }

    /// Arc length of the drawn polyline.
    pub fn length(&self) -> P::Scalar {
        self.to_line_path().length()
    }

    pub fn to_line_path(&self) -> LinePath<P, 2> {
        LinePath::from_points(&self.points)
    }
}

impl<P> Deref for PartialPath<P>
where
    P: Point,
{
    type Target = [P];

    fn deref(&self) -> &[P] {
        &self.points
    }
}

/// Anchor points and leg lengths of a check mark laid out in a drawing rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckGeometry<F> {
    start: Point2<F>,
    pivot: Point2<F>,
    end: Point2<F>,
    /// Length of the short leg, `start` to `pivot`
    minor_length: F,
    /// Length of the long leg, `pivot` to `end`
    major_length: F,
}

impl<F> CheckGeometry<F>
where
    F: Float + From<f32> + Default,
{
    /// Lay out the check mark in `rect`.
    pub fn build(rect: Rect<F>) -> Self {
        let start = rect.point_at(scalar(START.0), scalar(START.1));
        let pivot = rect.point_at(scalar(PIVOT.0), scalar(PIVOT.1));
        let end = rect.point_at(scalar(END.0), scalar(END.1));

        CheckGeometry {
            start,
            pivot,
            end,
            minor_length: start.distance(pivot),
            major_length: pivot.distance(end),
        }
    }

    pub fn start(&self) -> Point2<F> {
        self.start
    }

    pub fn pivot(&self) -> Point2<F> {
        self.pivot
    }

    pub fn end(&self) -> Point2<F> {
        self.end
    }

    pub fn minor_length(&self) -> F {
        self.minor_length
    }

    pub fn major_length(&self) -> F {
        self.major_length
    }

    pub fn total_length(&self) -> F {
        self.minor_length + self.major_length
    }

    /// Fraction of the total length at which the stroke reaches the pivot.
    /// Returns None for a degenerate check mark of zero length.
    pub fn pivot_fraction(&self) -> Option<F> {
        let total = self.total_length();
        if total > scalar(EPSILON) {
            Some(self.minor_length / total)
        } else {
            None
        }
    }

    /// The whole check mark, `[start, pivot, end]`.
    pub fn full_path(&self) -> PartialPath<Point2<F>> {
        PartialPath::from_points(&[self.start, self.pivot, self.end])
    }

    /// The visible part of the check mark after `fraction` of its total
    /// length has been drawn. `fraction` is clamped into [0, 1].
    ///
    /// Both legs advance at the same rate per unit of `fraction`: on the short
    /// leg the offset is `minor * fraction / pivot_fraction`, past the pivot it
    /// is `total * (fraction - pivot_fraction)`.
    /// Exactly at the pivot fraction the result is `[start, pivot]` without
    /// any measurement. A degenerate geometry yields an empty path.
    pub fn partial_path(&self, fraction: F) -> PartialPath<Point2<F>> {
        let pivot_fraction = match self.pivot_fraction() {
            Some(pivot_fraction) => pivot_fraction,
            None => return PartialPath::empty(),
        };
        let fraction = clamp_fraction(fraction);

        if fraction <= F::zero() {
            return PartialPath::from_points(&[self.start]);
        }
        if fraction >= F::one() {
            return self.full_path();
        }

        if fraction == pivot_fraction {
            PartialPath::from_points(&[self.start, self.pivot])
        } else if fraction < pivot_fraction {
            let minor_fraction = fraction / pivot_fraction;
            let distance = self.minor_length * minor_fraction;
            let head = self.minor_leg().point_at_length(distance).unwrap_or(self.pivot);
            PartialPath::from_points(&[self.start, head])
        } else {
            let remainder = fraction - pivot_fraction;
            let distance = self.total_length() * remainder;
            let head = self.major_leg().point_at_length(distance).unwrap_or(self.end);
            PartialPath::from_points(&[self.start, self.pivot, head])
        }
    }

    fn minor_leg(&self) -> LinePath<Point2<F>, 1> {
        LinePath::from_points(&[self.start, self.pivot])
    }

    fn major_leg(&self) -> LinePath<Point2<F>, 1> {
        LinePath::from_points(&[self.pivot, self.end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-4;

    fn square() -> CheckGeometry<f64> {
        CheckGeometry::build(Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    fn close(a: Point2<f64>, b: Point2<f64>) -> bool {
        a.distance(b) < TOLERANCE
    }

    #[test]
    fn anchors_in_square() {
        let geom = square();
        assert!(close(geom.start(), Point2::new(25.0, 50.0)));
        assert!(close(geom.pivot(), Point2::new(42.6, 66.0)));
        assert!(close(geom.end(), Point2::new(75.0, 30.0)));
        assert!((geom.minor_length() - 23.79).abs() < 0.01);
        assert!((geom.major_length() - 48.43).abs() < 0.01);
    }

    #[test]
    fn anchors_follow_rect_offset() {
        let geom = CheckGeometry::build(Rect::new(10.0f64, 20.0, 60.0, 70.0));
        assert!(close(geom.start(), Point2::new(22.5, 45.0)));
        assert!(close(geom.pivot(), Point2::new(31.3, 53.0)));
        assert!(close(geom.end(), Point2::new(47.5, 35.0)));
    }

    #[test]
    fn leg_lengths_non_negative() {
        let rects = [
            Rect::new(0.0f64, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 300.0, 20.0),
            Rect::new(-5.0, 3.0, 7.0, 90.0),
            Rect::new(0.0, 0.0, 0.0, 0.0),
        ];
        for rect in rects {
            let geom = CheckGeometry::build(rect);
            assert!(geom.minor_length() >= 0.0);
            assert!(geom.major_length() >= 0.0);
        }
    }

    #[test]
    fn zero_area_has_zero_legs() {
        let geom = CheckGeometry::build(Rect::new(12.0f64, 12.0, 12.0, 12.0));
        assert_eq!(geom.minor_length(), 0.0);
        assert_eq!(geom.major_length(), 0.0);
        assert!(geom.pivot_fraction().is_none());
        assert!(geom.partial_path(0.5).is_empty());
        assert!(geom.partial_path(1.0).is_empty());
    }

    #[test]
    fn zero_fraction_is_start_only() {
        let geom = square();
        let path = geom.partial_path(0.0);
        assert_eq!(path.points(), &[geom.start()]);
        assert!(!path.is_drawable());
    }

    #[test]
    fn full_fraction_is_whole_check() {
        let geom = square();
        let path = geom.partial_path(1.0);
        assert_eq!(path.points(), &[geom.start(), geom.pivot(), geom.end()]);
        assert_eq!(path, geom.full_path());
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        let geom = square();
        assert_eq!(geom.partial_path(-0.5), geom.partial_path(0.0));
        assert_eq!(geom.partial_path(3.0), geom.partial_path(1.0));
        assert_eq!(geom.partial_path(f64::NAN), geom.partial_path(0.0));
    }

    #[test]
    fn pivot_fraction_yields_short_leg() {
        let geom = square();
        let pivot_fraction = geom.pivot_fraction().unwrap();
        let path = geom.partial_path(pivot_fraction);
        assert_eq!(path.len(), 2);
        assert!(close(path[0], geom.start()));
        assert!(close(path[1], geom.pivot()));
    }

    #[test]
    fn continuous_across_pivot() {
        let geom = square();
        let pivot_fraction = geom.pivot_fraction().unwrap();
        let below = geom.partial_path(pivot_fraction - 1e-9);
        let above = geom.partial_path(pivot_fraction + 1e-9);
        assert!(close(below.head().unwrap(), geom.pivot()));
        assert!(close(above.head().unwrap(), geom.pivot()));
        assert_eq!(above.len(), 3);
    }

    #[test]
    fn monotonic_on_first_leg() {
        let geom = square();
        let pivot_fraction = geom.pivot_fraction().unwrap();
        let steps = 100;
        let mut previous = 0.0;
        for i in 1..=steps {
            let f = pivot_fraction * (i as f64 / steps as f64);
            let head = geom.partial_path(f).head().unwrap();
            let travelled = geom.start().distance(head);
            assert!(travelled > previous);
            previous = travelled;
        }
    }

    #[test]
    fn drawn_length_is_proportional() {
        let geom = square();
        let total = geom.total_length();
        for i in 0..=20 {
            let f = i as f64 / 20.0;
            let drawn = geom.partial_path(f).length();
            assert!((drawn - total * f).abs() < TOLERANCE);
        }
    }

    #[test]
    fn second_leg_offset_scales_with_total() {
        let geom = square();
        let pivot_fraction = geom.pivot_fraction().unwrap();
        let path = geom.partial_path(0.5);
        assert_eq!(path.len(), 3);
        assert!(close(path[0], geom.start()));
        assert!(close(path[1], geom.pivot()));

        let expected = geom.total_length() * (0.5 - pivot_fraction);
        assert!((geom.pivot().distance(path[2]) - expected).abs() < TOLERANCE);
        let on_leg = geom.pivot().distance(path[2]) + path[2].distance(geom.end());
        assert!((on_leg - geom.major_length()).abs() < TOLERANCE);
    }

    #[test]
    fn partial_path_is_idempotent() {
        let geom = CheckGeometry::build(Rect::new(3.0f32, 7.0, 91.0, 88.0));
        for i in 0..=10 {
            let f = i as f32 / 10.0;
            assert_eq!(geom.partial_path(f), geom.partial_path(f));
        }
    }

    #[test]
    fn non_square_rect_still_builds() {
        let geom = CheckGeometry::build(Rect::new(0.0f64, 0.0, 200.0, 50.0));
        let path = geom.partial_path(0.75);
        assert_eq!(path.len(), 3);
        assert!(path.iter().all(|p| p.is_finite()));
    }
}
