//! Per-frame orchestration: input, growth, boost, chain solve, camera.

use crate::camera::{CameraFollow, CameraState};
use crate::chain::{ChainConfig, SegmentChain};
use crate::clock::Clock;
use crate::config::MotionConfig;
use crate::error::MotionError;
use crate::float::Float;
use crate::input::{InputSmoother, InputSnapshot, InputSource};
use crate::observer::StepObserver;
use crate::render::{FrameView, Renderer};
use crate::solver::ChainSolver;
use crate::vec::Vec2;

/// Transient motion values, recomputed every frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionState<F: Float> {
    pub movement_direction: Vec2<F>,
    pub look_direction: Vec2<F>,
    /// Seconds left in the current boost interval, never negative.
    pub boost_remaining: F,
}

/// One creature and its camera.
///
/// Owns all mutable state; renderers borrow a [`FrameView`] between steps.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    config: MotionConfig<F>,
    chain: SegmentChain<F>,
    smoother: InputSmoother<F>,
    solver: ChainSolver<F>,
    camera: CameraFollow<F>,
    boost_remaining: F,
}

impl<F: Float> Simulation<F> {
    pub fn new(chain: &ChainConfig<F>, config: MotionConfig<F>) -> Result<Self, MotionError> {
        Self::with_chain(SegmentChain::from_config(chain)?, config)
    }

    pub fn with_chain(chain: SegmentChain<F>, config: MotionConfig<F>) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Simulation {
            smoother: InputSmoother::new(&config),
            solver: ChainSolver::from_config(&config),
            camera: CameraFollow::new(&config),
            chain,
            config,
            boost_remaining: F::zero(),
        })
    }

    pub fn config(&self) -> &MotionConfig<F> {
        &self.config
    }

    pub fn chain(&self) -> &SegmentChain<F> {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut SegmentChain<F> {
        &mut self.chain
    }

    pub fn smoother_mut(&mut self) -> &mut InputSmoother<F> {
        &mut self.smoother
    }

    pub fn camera(&self) -> CameraState<F> {
        self.camera.state()
    }

    pub fn camera_mut(&mut self) -> &mut CameraFollow<F> {
        &mut self.camera
    }

    pub fn motion(&self) -> MotionState<F> {
        MotionState {
            movement_direction: self.smoother.movement_direction(),
            look_direction: self.smoother.look_direction(),
            boost_remaining: self.boost_remaining.max(F::zero()),
        }
    }

    pub fn is_boosting(&self) -> bool {
        self.boost_remaining > F::zero()
    }

    /// Head speed for the current frame.
    pub fn head_speed(&self) -> F {
        if self.is_boosting() {
            self.config.base_speed * self.config.boost_factor
        } else {
            self.config.base_speed
        }
    }

    /// Pull `dt` and input from the host, then step.
    pub fn tick<S, C, O>(
        &mut self,
        source: &mut S,
        clock: &mut C,
        viewport_half: Vec2<F>,
        observer: &mut O,
    ) -> Result<(), MotionError>
    where
        S: InputSource<F> + ?Sized,
        C: Clock<F> + ?Sized,
        O: StepObserver,
    {
        let dt = clock.elapsed_since_last_frame();
        let input = source.snapshot();
        self.step(&input, dt, viewport_half, observer)
    }

    /// Advance one frame.
    ///
    /// Order: smooth input, growth, boost/shrink, solve (consuming boost
    /// time), camera.
    pub fn step<O: StepObserver>(
        &mut self,
        input: &InputSnapshot<F>,
        dt: F,
        viewport_half: Vec2<F>,
        observer: &mut O,
    ) -> Result<(), MotionError> {
        let dt = self.sanitize_dt(dt, observer);

        self.smoother.update(input, dt);

        if input.growth {
            self.grow(observer);
        }
        if input.boost {
            self.boost(observer)?;
        }

        let speed = self.head_speed();
        self.solver.step(
            &mut self.chain,
            self.smoother.movement_direction(),
            speed,
            dt,
            observer,
        );
        if self.is_boosting() {
            self.boost_remaining = self.boost_remaining - dt;
        }

        self.camera.update(
            self.chain.head().position,
            self.smoother.look_direction(),
            input.zoom,
            viewport_half,
            dt,
        );

        observer.on_step_complete();
        Ok(())
    }

    /// Add `growth_amount` segments at the tail, all coincident with the
    /// current tail. Returns how many were added (zero when disabled).
    pub fn grow<O: StepObserver>(&mut self, observer: &mut O) -> usize {
        if !self.config.growth_enabled {
            return 0;
        }
        let tail = *self.chain.tail();
        for _ in 0..self.config.growth_amount {
            self.chain.append_at_tail(tail.position, tail.rest_length);
        }
        observer.on_grow(self.config.growth_amount, self.chain.len());
        self.config.growth_amount
    }

    /// Apply the held-boost rule for one frame. Returns true when a tail
    /// segment was spent on a new boost interval.
    pub fn boost<O: StepObserver>(&mut self, observer: &mut O) -> Result<bool, MotionError> {
        if !self.config.boost_enabled || self.chain.len() <= self.config.min_length {
            return Ok(false);
        }
        if self.boost_remaining > F::zero() {
            return Ok(false);
        }

        self.boost_remaining = self.boost_remaining + self.config.boost_duration;
        self.chain.remove_at_tail().map_err(|e| {
            log::error!("boost shrink passed the length floor check: {}", e);
            e
        })?;
        observer.on_shrink(self.chain.len());
        Ok(true)
    }

    fn sanitize_dt<O: StepObserver>(&self, dt: F, observer: &mut O) -> F {
        let used = if !dt.is_finite() || dt < F::zero() {
            F::zero()
        } else {
            match self.config.max_frame_dt {
                Some(max) if dt > max => max,
                _ => dt,
            }
        };
        if used != dt {
            log::warn!("frame dt {:?} replaced with {:?}", dt, used);
            observer.on_dt_sanitized(dt.to_f32(), used.to_f32());
        }
        used
    }

    pub fn frame_view(&self) -> FrameView<'_, F> {
        FrameView {
            chain: &self.chain,
            movement_direction: self.smoother.movement_direction(),
            look_direction: self.smoother.look_direction(),
            thickness: self.chain.thickness(),
            boosting: self.is_boosting(),
            camera: self.camera.state(),
        }
    }

    pub fn render<R: Renderer<F> + ?Sized>(&self, renderer: &mut R) {
        renderer.draw(&self.frame_view());
    }
}
