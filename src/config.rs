//! Tuning parameters for the simulation.

use crate::error::MotionError;
use crate::float::Float;

/// Tuning for input smoothing, growth, boost, solver and camera.
///
/// Defaults reproduce the full game (growth and boost enabled). Use
/// [`MotionConfig::classic`] for the variant without either.
///
/// # Builder Pattern
/// ```
/// use slither::config::MotionConfig;
///
/// let config: MotionConfig<f32> = MotionConfig::new()
///     .with_base_speed(120.0)
///     .with_boost(true)
///     .with_min_length(12)
///     .with_max_frame_dt(Some(0.1));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig<F: Float> {
    /// Head speed in world units per second. Also the solver's correction gain.
    pub base_speed: F,
    /// Head speed multiplier while boosting. Default: 4.
    pub boost_factor: F,
    /// Seconds of boost bought by one tail segment. Default: 0.2.
    pub boost_duration: F,
    pub boost_enabled: bool,
    /// Boosting never shrinks the chain to this many segments or fewer. Default: 10.
    pub min_length: usize,
    pub growth_enabled: bool,
    /// Segments added per growth trigger. Default: 10.
    pub growth_amount: usize,
    /// Raw move input shorter than this is ignored. Default: 0.1.
    pub deadzone: F,
    /// Turn smoothing time constant for pointer-relative input (seconds).
    pub pointer_turn_time: F,
    /// Turn smoothing time constant for analog-stick input (seconds).
    pub stick_turn_time: F,
    /// Upper zoom bound; zoom is clamped to `[1, zoom_max]`. Default: 2.
    pub zoom_max: F,
    pub zoom_time: F,
    pub camera_follow_time: F,
    /// Screen-space look-ahead distance applied along the look direction.
    pub look_ahead: F,
    /// Largest solver sub-step. Default: 1/240 s.
    pub max_sub_dt: F,
    /// Optional clamp on a single frame's dt. Default: none.
    pub max_frame_dt: Option<F>,
}

impl<F: Float> MotionConfig<F> {
    pub fn new() -> Self {
        MotionConfig {
            base_speed: F::from_f32(150.0),
            boost_factor: F::from_f32(4.0),
            boost_duration: F::from_f32(0.2),
            boost_enabled: true,
            min_length: 10,
            growth_enabled: true,
            growth_amount: 10,
            deadzone: F::from_f32(0.1),
            pointer_turn_time: F::from_f32(0.05),
            stick_turn_time: F::from_f32(0.05),
            zoom_max: F::from_f32(2.0),
            zoom_time: F::from_f32(0.2),
            camera_follow_time: F::from_f32(0.1),
            look_ahead: F::from_f32(200.0),
            max_sub_dt: F::from_f32(1.0 / 240.0),
            max_frame_dt: None,
        }
    }

    /// Plain movement: no growth trigger, no boost.
    pub fn classic() -> Self {
        Self::new().with_growth(false).with_boost(false)
    }

    pub fn with_base_speed(mut self, speed: F) -> Self {
        self.base_speed = speed;
        self
    }

    pub fn with_boost(mut self, enabled: bool) -> Self {
        self.boost_enabled = enabled;
        self
    }

    pub fn with_boost_factor(mut self, factor: F) -> Self {
        self.boost_factor = factor;
        self
    }

    pub fn with_boost_duration(mut self, seconds: F) -> Self {
        self.boost_duration = seconds;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_growth(mut self, enabled: bool) -> Self {
        self.growth_enabled = enabled;
        self
    }

    pub fn with_growth_amount(mut self, segments: usize) -> Self {
        self.growth_amount = segments;
        self
    }

    pub fn with_deadzone(mut self, deadzone: F) -> Self {
        self.deadzone = deadzone;
        self
    }

    pub fn with_turn_times(mut self, pointer: F, stick: F) -> Self {
        self.pointer_turn_time = pointer;
        self.stick_turn_time = stick;
        self
    }

    pub fn with_zoom_max(mut self, zoom_max: F) -> Self {
        self.zoom_max = zoom_max;
        self
    }

    pub fn with_look_ahead(mut self, distance: F) -> Self {
        self.look_ahead = distance;
        self
    }

    pub fn with_max_sub_dt(mut self, seconds: F) -> Self {
        self.max_sub_dt = seconds;
        self
    }

    pub fn with_max_frame_dt(mut self, seconds: Option<F>) -> Self {
        self.max_frame_dt = seconds;
        self
    }

    /// Check that every value is in range before a simulation is built.
    pub fn validate(&self) -> Result<(), MotionError> {
        let positive = |v: F| v.is_finite() && v > F::zero();
        let non_negative = |v: F| v.is_finite() && v >= F::zero();

        if !non_negative(self.base_speed) {
            return Err(MotionError::InvalidConfig("base_speed must be finite and >= 0"));
        }
        if !positive(self.boost_factor) {
            return Err(MotionError::InvalidConfig("boost_factor must be positive"));
        }
        if !positive(self.boost_duration) {
            return Err(MotionError::InvalidConfig("boost_duration must be positive"));
        }
        if self.min_length == 0 {
            return Err(MotionError::InvalidConfig("min_length must be at least 1"));
        }
        if !(non_negative(self.deadzone) && self.deadzone < F::one()) {
            return Err(MotionError::InvalidConfig("deadzone must be in [0, 1)"));
        }
        if !(non_negative(self.pointer_turn_time) && non_negative(self.stick_turn_time)) {
            return Err(MotionError::InvalidConfig("turn times must be >= 0"));
        }
        if !(self.zoom_max.is_finite() && self.zoom_max >= F::one()) {
            return Err(MotionError::InvalidConfig("zoom_max must be >= 1"));
        }
        if !(non_negative(self.zoom_time) && non_negative(self.camera_follow_time)) {
            return Err(MotionError::InvalidConfig("camera time constants must be >= 0"));
        }
        if !non_negative(self.look_ahead) {
            return Err(MotionError::InvalidConfig("look_ahead must be >= 0"));
        }
        if !positive(self.max_sub_dt) {
            return Err(MotionError::InvalidConfig("max_sub_dt must be positive"));
        }
        if !(self.base_speed * self.max_sub_dt < F::one()) {
            return Err(MotionError::InvalidConfig("base_speed * max_sub_dt must be below 1"));
        }
        if let Some(max) = self.max_frame_dt {
            if !positive(max) {
                return Err(MotionError::InvalidConfig("max_frame_dt must be positive"));
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for MotionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
