//! Frame clocks.

use crate::float::Float;

/// Supplies the elapsed time since the previous frame, in seconds.
pub trait Clock<F: Float> {
    fn elapsed_since_last_frame(&mut self) -> F;
}

/// Reports the same delta every frame. Handy for tests and replays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedClock<F: Float> {
    pub dt: F,
}

impl<F: Float> FixedClock<F> {
    pub fn new(dt: F) -> Self {
        FixedClock { dt }
    }
}

impl<F: Float> Clock<F> for FixedClock<F> {
    fn elapsed_since_last_frame(&mut self) -> F {
        self.dt
    }
}

/// Derives deltas from absolute timestamps pushed by the host
/// (e.g. animation-frame callbacks).
///
/// The first frame after construction reports zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TimestampClock<F: Float> {
    last: Option<F>,
    now: Option<F>,
}

impl<F: Float> TimestampClock<F> {
    pub fn new() -> Self {
        TimestampClock { last: None, now: None }
    }

    /// Record the current time in seconds.
    pub fn set_now(&mut self, seconds: F) {
        self.now = Some(seconds);
    }
}

impl<F: Float> Clock<F> for TimestampClock<F> {
    fn elapsed_since_last_frame(&mut self) -> F {
        let dt = match (self.last, self.now) {
            (Some(last), Some(now)) => (now - last).max(F::zero()),
            _ => F::zero(),
        };
        self.last = self.now;
        dt
    }
}
