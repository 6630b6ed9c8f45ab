use core::ops::{Add, Sub};

use num_traits::Float;

/// Trait defined over generic points P whose coordinates are of type `Scalar`.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for measuring paths, so implementing it mostly means wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Copy
    + PartialEq
    + Default
{
    type Scalar: Float + From<f32>;
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1] -> [x, y]
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Multiplies every component by `factor`
    fn scale(self, factor: Self::Scalar) -> Self;

    /// Returns the squared L2 norm of the Point interpreted as a vector
    fn squared_length(&self) -> Self::Scalar;

    /// Returns the distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).squared_length().sqrt()
    }

    /// Linear interpolation between self (t = 0) and other (t = 1)
    fn lerp(&self, other: Self, t: Self::Scalar) -> Self {
        *self + (other - *self).scale(t)
    }
}
