//! Geometry engine for an animated check mark inscribed in a ring.
//!
//! The check glyph is a two-leg polyline (short leg, pivot, long leg) and the
//! ring is an arc inscribed in a rectangle. For any completion fraction in
//! `[0, 1]` the builders return the visible part of each shape, measured by
//! true arc length so the stroke advances at a uniform visual speed across the
//! pivot. A [`ProgressDriver`] ties both shapes and a short scale pulse to a
//! single external clock.
//!
//! ```rust
//! use core::time::Duration;
//! use checkstroke::{CheckConfig, ProgressDriver, Rect};
//!
//! let mut driver = ProgressDriver::<f32>::new(CheckConfig::default());
//! driver.on_size_changed(Rect::new(0.0, 0.0, 100.0, 100.0), 8.0);
//! driver.check(Duration::ZERO);
//!
//! let frame = driver.frame(Duration::from_millis(150)).unwrap();
//! assert!(frame.ring.sweep_angle > 0.0);
//! ```
//!
//! The crate is `#![no_std]` and allocation free: partial paths are stored in
//! fixed-capacity `tinyvec::ArrayVec`s and returned by value.
#![no_std]

extern crate num_traits;
extern crate tinyvec;

pub mod check;
pub mod config;
pub mod cubic_bezier;
pub mod driver;
pub mod easing;
pub mod find_root;
pub mod line;
pub mod path;
pub mod point;
pub mod point2;
pub mod rect;
pub mod ring;
pub mod roots;
pub mod timeline;

use num_traits::{Float, NumCast};

// export common types at crate root
pub use check::{CheckGeometry, PartialPath};
pub use config::{CheckConfig, Color, StrokeStyle};
pub use cubic_bezier::CubicBezier;
pub use driver::{DriverState, Frame, ProgressDriver, Run};
pub use easing::Easing;
pub use find_root::FindRoot;
pub use line::LineSegment;
pub use path::LinePath;
pub use point::Point;
pub use point2::Point2;
pub use rect::Rect;
pub use ring::{ArcDescriptor, RingGeometry};
pub use roots::RootFindingError;
pub use timeline::Timeline;

/// Absolute tolerance used for length and parameter comparisons.
pub(crate) const EPSILON: f64 = 1e-6;

/// Convert an `f64` constant into the scalar type of the caller without
/// rounding through `f32` first.
#[inline]
pub(crate) fn scalar<F: Float>(value: f64) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::nan)
}

/// Clamp a fraction into `[0, 1]`, mapping NaN to 0.
#[inline]
pub(crate) fn clamp_fraction<F: Float>(fraction: F) -> F {
    if fraction.is_nan() {
        log::trace!("NaN fraction treated as 0");
        return F::zero();
    }
    if fraction < F::zero() || fraction > F::one() {
        log::trace!("fraction out of range, clamped into [0, 1]");
    }
    fraction.max(F::zero()).min(F::one())
}
