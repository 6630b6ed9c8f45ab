use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;

/// A point (or vector) in the drawing coordinate space.
/// The y axis points down, as in screen coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub(crate) x: F,
    pub(crate) y: F,
}

impl<F> Point2<F>
where
    F: Float,
{
    pub fn new(x: F, y: F) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> F {
        self.x
    }

    pub fn y(&self) -> F {
        self.y
    }

    /// Returns true if both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F> From<(F, F)> for Point2<F>
where
    F: Float,
{
    fn from((x, y): (F, F)) -> Self {
        Point2::new(x, y)
    }
}

impl<F> Add for Point2<F>
where
    F: Add<Output = F>,
{
    type Output = Self;

    fn add(self, other: Point2<F>) -> Point2<F> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F> Sub for Point2<F>
where
    F: Sub<Output = F>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F> Mul<F> for Point2<F>
where
    F: Mul<Output = F> + Copy,
{
    type Output = Point2<F>;

    fn mul(self, rhs: F) -> Point2<F> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<F> Point for Point2<F>
where
    F: Float + From<f32> + Default,
{
    type Scalar = F;
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => F::nan(),
        }
    }

    fn scale(self, factor: Self::Scalar) -> Self {
        self * factor
    }

    fn squared_length(&self) -> Self::Scalar {
        (self.x * self.x) + (self.y * self.y)
    }

    /// Distance computed from the absolute coordinate deltas
    fn distance(&self, other: Self) -> Self::Scalar {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        ((dy * dy) + (dx * dx)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_pythagorean() {
        let p = Point2::new(0f64, 0f64);
        let q = Point2::new(3f64, 4f64);
        assert!((p.distance(q) - 5.0).abs() < 1e-12);
        assert!((q.distance(p) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let p = Point2::new(1f32, 2f32);
        let q = Point2::new(5f32, -2f32);
        assert_eq!(p.lerp(q, 0.0), p);
        assert_eq!(p.lerp(q, 1.0), q);
        assert_eq!(p.lerp(q, 0.5), Point2::new(3.0, 0.0));
    }

    #[test]
    fn axis_access() {
        let p = Point2::new(7f64, -1f64);
        assert_eq!(p.axis(0), 7.0);
        assert_eq!(p.axis(1), -1.0);
        assert!(p.axis(2).is_nan());
    }
}
