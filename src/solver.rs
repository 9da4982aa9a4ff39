//! Trailing-chain relaxation: the head moves, every other segment is pulled
//! toward its head-ward neighbor once it falls behind by more than its rest
//! length.

use crate::chain::SegmentChain;
use crate::config::MotionConfig;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec2;

/// Upper bound on sub-steps per frame, so a huge stall cannot spin forever.
/// Past it sub-steps grow longer than `max_sub_dt` and corrections saturate.
pub const MAX_SUB_STEPS: usize = 1024;

/// Outcome of solving one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub sub_steps: usize,
    /// Segment moves summed over every sub-step (head excluded).
    pub corrected: usize,
}

/// Per-frame solver for a [`SegmentChain`].
///
/// Corrections are proportional to the raw offset from the neighbor, scaled by
/// `base_speed * dt`, so a segment that lags further catches up faster and the
/// body looks elastic rather than rigid. The frame is split into sub-steps no
/// longer than `max_sub_dt`, which keeps that gain below one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainSolver<F: Float> {
    pub base_speed: F,
    pub max_sub_dt: F,
}

impl<F: Float> ChainSolver<F> {
    pub fn new(base_speed: F, max_sub_dt: F) -> Self {
        ChainSolver { base_speed, max_sub_dt }
    }

    pub fn from_config(config: &MotionConfig<F>) -> Self {
        Self::new(config.base_speed, config.max_sub_dt)
    }

    /// Number of equal sub-steps used for a frame of length `dt`.
    pub fn sub_steps(&self, dt: F) -> usize {
        if !(dt > F::zero()) || !(self.max_sub_dt > F::zero()) {
            return 1;
        }
        // A frame within rounding of a multiple of max_sub_dt must not gain
        // an extra sub-step.
        let steps = (dt / self.max_sub_dt - F::from_f32(1e-3)).ceil().to_f32();
        if steps >= MAX_SUB_STEPS as f32 {
            MAX_SUB_STEPS
        } else {
            (steps as usize).max(1)
        }
    }

    /// Advance the chain by one frame.
    ///
    /// The head travels `direction * head_speed * dt` in total. A non-finite
    /// or negative `dt` moves nothing.
    pub fn step<O: StepObserver>(
        &self,
        chain: &mut SegmentChain<F>,
        direction: Vec2<F>,
        head_speed: F,
        dt: F,
        observer: &mut O,
    ) -> SolveStats {
        let dt = if dt.is_finite() && dt > F::zero() { dt } else { F::zero() };
        let sub_steps = self.sub_steps(dt);
        let sub_dt = dt / F::from_f32(sub_steps as f32);

        let mut corrected = 0;
        for _ in 0..sub_steps {
            corrected += self.relax(chain, direction, head_speed, sub_dt);
        }

        observer.on_solve(sub_steps, corrected);
        SolveStats { sub_steps, corrected }
    }

    /// A single tail-to-head pass over the chain. Returns how many non-head
    /// segments moved.
    ///
    /// Each segment reads its neighbor before that neighbor is updated in this
    /// pass, so corrections use the previous pass's end state.
    ///
    /// The correction gain is capped at one: a segment never moves past its
    /// neighbor, even when `dt` exceeds `max_sub_dt` (a saturated sub-step
    /// count or a direct call).
    pub fn relax(
        &self,
        chain: &mut SegmentChain<F>,
        direction: Vec2<F>,
        head_speed: F,
        dt: F,
    ) -> usize {
        let gain = (self.base_speed * dt).min(F::one());
        let mut corrected = 0;

        let mut cursor = Some(chain.tail_id());
        while let Some(id) = cursor {
            let segment = *chain.segment(id);
            match segment.next() {
                None => {
                    chain.segment_mut(id).position += direction.scale(head_speed * dt);
                }
                Some(next) => {
                    let delta = chain.segment(next).position - segment.position;
                    if delta.length_sq() > segment.rest_length * segment.rest_length {
                        chain.segment_mut(id).position += delta.scale(gain);
                        corrected += 1;
                    }
                }
            }
            cursor = segment.next();
        }

        corrected
    }
}
