//! Drives the check mark, the ring and the scale pulse from one external clock.
//!
//! The host forwards three kinds of events:
//! - layout changes through [`ProgressDriver::on_size_changed`],
//! - user intent through [`ProgressDriver::check`] and [`ProgressDriver::uncheck`],
//! - frame callbacks through [`ProgressDriver::frame`], passing its clock reading.
//!
//! Everything runs synchronously on the caller's thread.

use core::time::Duration;

use num_traits::Float;

use super::check::{CheckGeometry, PartialPath};
use super::config::{CheckConfig, StrokeStyle};
use super::point2::Point2;
use super::rect::Rect;
use super::ring::{ArcDescriptor, RingGeometry};
use super::scalar;
use super::timeline::Timeline;

/// The three timelines of one check animation, started from the same clock reading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Run {
    pub check: Timeline,
    pub ring: Timeline,
    pub scale: Timeline,
}

impl Run {
    fn start(config: &CheckConfig, now: Duration) -> Self {
        let stroke = Timeline::new(config.check_duration)
            .with_easing(config.stroke_easing)
            .started_at(now);
        let scale = Timeline::new(config.scale_duration)
            .with_delay(config.scale_delay)
            .with_easing(config.scale_easing)
            .started_at(now);
        Run {
            check: stroke,
            ring: stroke,
            scale,
        }
    }

    /// Clock reading at which every timeline of the run has finished.
    pub fn end_time(&self) -> Duration {
        self.check
            .end_time()
            .max(self.ring.end_time())
            .max(self.scale.end_time())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DriverState {
    Idle { checked: bool },
    Animating(Run),
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<F>
where
    F: Float + From<f32> + Default,
{
    pub check: PartialPath<Point2<F>>,
    pub ring: ArcDescriptor<F>,
    /// Uniform scale applied to both axes of the whole glyph
    pub scale: F,
}

pub struct ProgressDriver<F> {
    config: CheckConfig,
    check_geometry: Option<CheckGeometry<F>>,
    ring_geometry: Option<RingGeometry<F>>,
    state: DriverState,
}

impl<F> ProgressDriver<F>
where
    F: Float + From<f32> + Default,
{
    pub fn new(config: CheckConfig) -> Self {
        ProgressDriver {
            config,
            check_geometry: None,
            ring_geometry: None,
            state: DriverState::Idle { checked: false },
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// The paint to stroke both shapes with. Its width follows the latest
    /// `on_size_changed`.
    pub fn style(&self) -> StrokeStyle {
        self.config.stroke
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_checked(&self) -> bool {
        !matches!(self.state, DriverState::Idle { checked: false })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, DriverState::Animating(..))
    }

    pub fn check_geometry(&self) -> Option<&CheckGeometry<F>> {
        self.check_geometry.as_ref()
    }

    pub fn ring_geometry(&self) -> Option<&RingGeometry<F>> {
        self.ring_geometry.as_ref()
    }

    /// Rebuild both geometries for a new drawing area.
    pub fn on_size_changed(&mut self, rect: Rect<F>, stroke_width: F) {
        if !rect.is_square() {
            log::warn!(
                "check mark will look distorted: drawing area is not square ({} x {})",
                rect.width().to_f64().unwrap_or(f64::NAN),
                rect.height().to_f64().unwrap_or(f64::NAN)
            );
        }
        if let Some(width) = stroke_width.to_f32() {
            self.config.stroke.width = width;
        }
        self.check_geometry = Some(CheckGeometry::build(rect));
        self.ring_geometry = Some(RingGeometry::build(rect, stroke_width));
        log::debug!("geometry rebuilt for new drawing area");
    }

    /// Start the check animation at clock reading `now`. A run already in
    /// flight is replaced and every timeline restarts from zero.
    pub fn check(&mut self, now: Duration) {
        if self.is_animating() {
            log::debug!("check restarted at {:?}", now);
        } else {
            log::debug!("check started at {:?}", now);
        }
        self.state = DriverState::Animating(Run::start(&self.config, now));
    }

    /// Reset to the unchecked state immediately, without animation.
    /// A run in flight is dropped.
    pub fn uncheck(&mut self) {
        if self.is_animating() {
            log::debug!("uncheck cancelled a running check animation");
        }
        self.state = DriverState::Idle { checked: false };
    }

    /// Geometry to draw at clock reading `now`, or None if nothing is drawn
    /// (unchecked, or no layout yet). Settles a finished run into the
    /// checked state.
    pub fn frame(&mut self, now: Duration) -> Option<Frame<F>> {
        if let DriverState::Animating(run) = self.state {
            if now >= run.end_time() {
                log::debug!("check animation settled");
                self.state = DriverState::Idle { checked: true };
            }
        }

        let (check, ring, scale) = match self.state {
            DriverState::Idle { checked: false } => return None,
            DriverState::Idle { checked: true } => (F::one(), F::one(), F::one()),
            DriverState::Animating(run) => (
                run.check.fraction(now),
                run.ring.fraction(now),
                self.scale_at(run.scale.fraction(now)),
            ),
        };

        let check_geometry = self.check_geometry.as_ref()?;
        let ring_geometry = self.ring_geometry.as_ref()?;
        Some(Frame {
            check: check_geometry.partial_path(check),
            ring: ring_geometry.partial_path(ring),
            scale,
        })
    }

    /// Scale factor for an eased pulse fraction: 1 at the ends, `scale_min` halfway.
    fn scale_at(&self, fraction: F) -> F {
        let half = scalar::<F>(0.5);
        let two = scalar::<F>(2.0);
        let min = scalar::<F>(f64::from(self.config.scale_min));
        if fraction < half {
            F::one() + (min - F::one()) * (fraction * two)
        } else {
            min + (F::one() - min) * ((fraction - half) * two)
        }
    }
}
