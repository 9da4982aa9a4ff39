//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor what the simulation does each frame
/// (for debugging, overlays, sound cues or profiling). All methods have
/// default no-op implementations.
pub trait StepObserver {
    /// Called after the solver finished a frame.
    ///
    /// `corrected` counts segment moves summed over all sub-steps.
    fn on_solve(&mut self, _sub_steps: usize, _corrected: usize) {}

    /// Called after a growth trigger added `_added` segments.
    fn on_grow(&mut self, _added: usize, _len: usize) {}

    /// Called when a boost activation consumed a tail segment.
    fn on_shrink(&mut self, _len: usize) {}

    /// Called when a frame's dt had to be clamped or discarded.
    fn on_dt_sanitized(&mut self, _raw: f32, _used: f32) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards events to the `log` facade.
///
/// Growth and shrink go to `debug`, per-frame solver stats to `trace`.
/// Sanitized frame times are already logged by the simulation itself.
pub struct LogStepObserver;

impl StepObserver for LogStepObserver {
    fn on_solve(&mut self, sub_steps: usize, corrected: usize) {
        log::trace!("solved chain in {} sub-step(s), {} correction(s)", sub_steps, corrected);
    }

    fn on_grow(&mut self, added: usize, len: usize) {
        log::debug!("grew by {} segment(s), length now {}", added, len);
    }

    fn on_shrink(&mut self, len: usize) {
        log::debug!("boost consumed a tail segment, length now {}", len);
    }

    fn on_step_complete(&mut self) {
        log::trace!("step complete");
    }
}
