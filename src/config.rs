//! Stroke styling and animation timing.

use core::time::Duration;

use super::easing::Easing;

const DEFAULT_STROKE_WIDTH: f32 = 8.0;
/// Greenish
const DEFAULT_STROKE_COLOR: u32 = 0xFF1A_AB00;
const CHECK_ANIM_DURATION: Duration = Duration::from_millis(300);
const SCALE_ANIM_DELAY: Duration = Duration::from_millis(280);
const SCALE_ANIM_DURATION: Duration = Duration::from_millis(250);
const SCALE_MIN: f32 = 0.80;

/// Packed 32 bit ARGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Color(DEFAULT_STROKE_COLOR)
    }
}

/// How the renderer should stroke the check mark and the ring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
    pub round_cap: bool,
    pub round_join: bool,
    pub anti_alias: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        StrokeStyle {
            width: DEFAULT_STROKE_WIDTH,
            color: Color::default(),
            round_cap: true,
            round_join: true,
            anti_alias: true,
        }
    }
}

/// Styling and timing of a check animation.
///
/// The check mark and the ring share `check_duration` and `stroke_easing`.
/// The scale pulse starts `scale_delay` after the stroke animations, shrinks
/// to `scale_min` halfway through `scale_duration` and grows back to 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckConfig {
    pub stroke: StrokeStyle,
    pub check_duration: Duration,
    pub scale_delay: Duration,
    pub scale_duration: Duration,
    pub scale_min: f32,
    pub stroke_easing: Easing,
    pub scale_easing: Easing,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            stroke: StrokeStyle::default(),
            check_duration: CHECK_ANIM_DURATION,
            scale_delay: SCALE_ANIM_DELAY,
            scale_duration: SCALE_ANIM_DURATION,
            scale_min: SCALE_MIN,
            stroke_easing: Easing::STROKE,
            scale_easing: Easing::FAST_OUT_SLOW_IN,
        }
    }
}

impl CheckConfig {
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke.width = width;
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke.color = color;
        self
    }

    pub fn with_check_duration(mut self, duration: Duration) -> Self {
        self.check_duration = duration;
        self
    }

    pub fn with_scale_timing(mut self, delay: Duration, duration: Duration) -> Self {
        self.scale_delay = delay;
        self.scale_duration = duration;
        self
    }

    pub fn with_scale_min(mut self, scale_min: f32) -> Self {
        self.scale_min = scale_min;
        self
    }

    pub fn with_stroke_easing(mut self, easing: Easing) -> Self {
        self.stroke_easing = easing;
        self
    }

    pub fn with_scale_easing(mut self, easing: Easing) -> Self {
        self.scale_easing = easing;
        self
    }

    /// Clock time from `check()` until every timeline has settled.
    pub fn total_duration(&self) -> Duration {
        let stroke_end = self.check_duration;
        let scale_end = self.scale_delay.saturating_add(self.scale_duration);
        stroke_end.max(scale_end)
    }
}
