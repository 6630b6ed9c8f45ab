//! Ring geometry: an arc inscribed in the drawing rectangle, swept clockwise
//! from its rightmost point.

use num_traits::Float;

use super::point::Point;
use super::point2::Point2;
use super::rect::Rect;
use super::{clamp_fraction, scalar};

/// Largest sweep the ring is ever drawn with, in degrees. A full turn is
/// never drawn, the ring keeps a one degree gap at its start.
pub const MAX_SWEEP_DEGREES: f64 = 359.0;

/// An elliptic arc inscribed in `rect`. Angles are in degrees, zero points
/// along +x and positive angles turn clockwise (y axis pointing down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcDescriptor<F> {
    pub rect: Rect<F>,
    pub start_angle: F,
    pub sweep_angle: F,
}

impl<F> ArcDescriptor<F>
where
    F: Float + From<f32> + Default,
{
    /// Point on the ellipse at `degrees` from the +x axis.
    pub fn point_at_angle(&self, degrees: F) -> Point2<F> {
        let half = scalar::<F>(0.5);
        let center = self.rect.center();
        let radians = degrees.to_radians();
        Point2::new(
            center.x + self.rect.width() * half * radians.cos(),
            center.y + self.rect.height() * half * radians.sin(),
        )
    }

    pub fn start_point(&self) -> Point2<F> {
        self.point_at_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Point2<F> {
        self.point_at_angle(self.start_angle + self.sweep_angle)
    }

    /// Returns true if the arc has no visible extent.
    pub fn is_empty(&self) -> bool {
        !(self.sweep_angle.abs() > F::zero()) || self.rect.is_empty()
    }

    /// Approximates the arc length by flattening the arc with `nsteps` straight chords.
    /// Remember this works by linear approximation, not the integral, so we have to accept error!
    pub fn arclen(&self, nsteps: usize) -> F {
        let nsteps = nsteps.max(1);
        let step = self.sweep_angle / scalar::<F>(nsteps as f64);
        let mut arclen = F::zero();
        let mut previous = self.start_point();
        for i in 1..=nsteps {
            let angle = self.start_angle + step * scalar::<F>(i as f64);
            let current = self.point_at_angle(angle);
            arclen = arclen + previous.distance(current);
            previous = current;
        }
        arclen
    }
}

/// Layout of the ring around the check mark.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingGeometry<F> {
    /// The drawing rectangle inset by half the stroke width so the stroke stays inside it
    rect: Rect<F>,
    /// Where the ring stroke starts
    start: Point2<F>,
}

impl<F> RingGeometry<F>
where
    F: Float + From<f32> + Default,
{
    /// Lay out the ring in `rect` for a stroke of `stroke_width`.
    pub fn build(rect: Rect<F>, stroke_width: F) -> Self {
        let half_stroke = stroke_width.max(F::zero()) * scalar(0.5);
        let rect = rect.inset(half_stroke, half_stroke);
        let start = Point2::new(rect.right, rect.height() * scalar(0.5));
        RingGeometry { rect, start }
    }

    pub fn rect(&self) -> Rect<F> {
        self.rect
    }

    pub fn start(&self) -> Point2<F> {
        self.start
    }

    /// The arc drawn after `fraction` of the ring animation.
    /// The sweep is linear in the fraction and capped at 359 degrees.
    pub fn partial_path(&self, fraction: F) -> ArcDescriptor<F> {
        let fraction = clamp_fraction(fraction);
        ArcDescriptor {
            rect: self.rect,
            start_angle: F::zero(),
            sweep_angle: scalar::<F>(MAX_SWEEP_DEGREES) * fraction,
        }
    }

    pub fn full_path(&self) -> ArcDescriptor<F> {
        self.partial_path(F::one())
    }

    /// Measured length of one full revolution, flattened with `nsteps` chords.
    pub fn circumference(&self, nsteps: usize) -> F {
        ArcDescriptor {
            rect: self.rect,
            start_angle: F::zero(),
            sweep_angle: scalar(360.0),
        }
        .arclen(nsteps)
    }
}
