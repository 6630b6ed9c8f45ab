use num_traits::Float;

use super::point2::Point2;
use super::scalar;

/// Axis aligned rectangle given by its edges, y axis pointing down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<F> {
    pub left: F,
    pub top: F,
    pub right: F,
    pub bottom: F,
}

impl<F> Rect<F>
where
    F: Float + From<f32>,
{
    pub fn new(left: F, top: F, right: F, bottom: F) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The drawing area of a `width` x `height` box after removing `padding`
    /// (left, top, right, bottom) from each side.
    pub fn from_padded(width: F, height: F, padding: (F, F, F, F)) -> Self {
        let (left, top, right, bottom) = padding;
        Rect::new(left, top, width - right, height - bottom)
    }

    pub fn width(&self) -> F {
        self.right - self.left
    }

    pub fn height(&self) -> F {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point2<F> {
        let half = scalar::<F>(0.5);
        Point2::new(
            self.left + self.width() * half,
            self.top + self.height() * half,
        )
    }

    /// Returns true if the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width() > F::zero() && self.height() > F::zero())
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Shrink the rectangle by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: F, dy: F) -> Self {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right - dx,
            self.bottom - dy,
        )
    }

    /// Point at fractions (`fx`, `fy`) of the width and height, measured from the top-left.
    pub fn point_at(&self, fx: F, fy: F) -> Point2<F> {
        Point2::new(
            self.left + self.width() * fx,
            self.top + self.height() * fy,
        )
    }
}
