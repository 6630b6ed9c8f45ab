//! Stateless timed value streams evaluated against an external clock.
//!
//! A [`Timeline`] does not tick. It records when it was started, how long it
//! waits and how long it runs, and answers "how far along are you at `now`?"
//! for any clock reading. Several timelines started from the same reading stay
//! in lockstep, and their relative delays are explicit data.

use core::time::Duration;

use num_traits::Float;

use super::easing::Easing;
use super::scalar;

/// A single animation timeline: waits `delay` after `start`, then runs for
/// `duration`, shaping its progress with `easing`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timeline {
    start: Duration,
    delay: Duration,
    duration: Duration,
    easing: Easing,
}

impl Timeline {
    /// Create a timeline with the given duration, no delay, linear easing, started at zero.
    pub fn new(duration: Duration) -> Self {
        Timeline {
            start: Duration::ZERO,
            delay: Duration::ZERO,
            duration,
            easing: Easing::Linear,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The same timeline restarted at clock reading `start`.
    pub fn started_at(mut self, start: Duration) -> Self {
        self.start = start;
        self
    }

    pub fn start(&self) -> Duration {
        self.start
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Clock reading at which the timeline begins to move.
    pub fn begin_time(&self) -> Duration {
        self.start.saturating_add(self.delay)
    }

    /// Clock reading at which the timeline reaches its end value.
    pub fn end_time(&self) -> Duration {
        self.begin_time().saturating_add(self.duration)
    }

    pub fn has_started(&self, now: Duration) -> bool {
        now >= self.begin_time()
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end_time()
    }

    /// Elapsed fraction of the running period at `now`, before easing, in [0, 1].
    pub fn linear_fraction<F>(&self, now: Duration) -> F
    where
        F: Float + From<f32>,
    {
        if !self.has_started(now) {
            return F::zero();
        }
        if self.duration.is_zero() || self.is_finished(now) {
            return F::one();
        }
        let elapsed = now - self.begin_time();
        let fraction = elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64;
        scalar(fraction.clamp(0.0, 1.0))
    }

    /// Eased fraction at `now`, in [0, 1] for the built-in curves.
    pub fn fraction<F>(&self, now: Duration) -> F
    where
        F: Float + From<f32> + Default,
    {
        self.easing.ease(self.linear_fraction::<F>(now))
    }
}
