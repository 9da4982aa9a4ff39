//! Camera follow: smoothed zoom and target that track the head with a
//! look-ahead bias.

use crate::config::MotionConfig;
use crate::float::Float;
use crate::input::ZoomRequest;
use crate::vec::Vec2;

/// View transform handed to the renderer.
///
/// Maps world to screen as `(p - target) * zoom + offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraState<F: Float> {
    pub zoom: F,
    pub target: Vec2<F>,
    pub offset: Vec2<F>,
}

impl<F: Float> CameraState<F> {
    pub fn world_to_screen(&self, point: Vec2<F>) -> Vec2<F> {
        (point - self.target).scale(self.zoom) + self.offset
    }

    pub fn screen_to_world(&self, point: Vec2<F>) -> Vec2<F> {
        (point - self.offset).scale(F::one() / self.zoom) + self.target
    }
}

impl<F: Float> Default for CameraState<F> {
    fn default() -> Self {
        CameraState { zoom: F::one(), target: Vec2::zero(), offset: Vec2::zero() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraFollow<F: Float> {
    state: CameraState<F>,
    zoom_max: F,
    zoom_time: F,
    follow_time: F,
    look_ahead: F,
}

impl<F: Float> CameraFollow<F> {
    pub fn new(config: &MotionConfig<F>) -> Self {
        CameraFollow {
            state: CameraState::default(),
            zoom_max: config.zoom_max,
            zoom_time: config.zoom_time,
            follow_time: config.camera_follow_time,
            look_ahead: config.look_ahead,
        }
    }

    pub fn state(&self) -> CameraState<F> {
        self.state
    }

    /// Zoom the camera is heading for, in `[1, zoom_max]`.
    pub fn target_zoom(&self, request: ZoomRequest<F>) -> F {
        let one = F::one();
        let zoom = match request {
            ZoomRequest::Focus(true) => self.zoom_max,
            ZoomRequest::Focus(false) => one,
            ZoomRequest::Trigger(axis) => {
                let pressed = ((axis + one) * F::half()).clamp(F::zero(), one);
                one + pressed * (self.zoom_max - one)
            }
        };
        zoom.clamp(one, self.zoom_max)
    }

    /// World point the camera target settles on.
    ///
    /// Look-ahead is divided by zoom so it covers the same screen distance at
    /// every zoom level.
    pub fn desired_target(&self, head: Vec2<F>, look: Vec2<F>, viewport_half: Vec2<F>) -> Vec2<F> {
        head - viewport_half + look.scale(self.look_ahead / self.state.zoom)
    }

    pub fn update(
        &mut self,
        head: Vec2<F>,
        look: Vec2<F>,
        zoom: ZoomRequest<F>,
        viewport_half: Vec2<F>,
        dt: F,
    ) {
        let goal = self.target_zoom(zoom);
        self.state.zoom = self
            .state
            .zoom
            .lerp(goal, F::smoothing(dt, self.zoom_time))
            .clamp(F::one(), self.zoom_max);

        let desired = self.desired_target(head, look, viewport_half);
        self.state.target = self.state.target.lerp(desired, F::smoothing(dt, self.follow_time));
        self.state.offset = viewport_half.scale(F::one() - self.state.zoom);
    }

    /// Jump straight to the resting position for `head`, keeping the zoom.
    pub fn snap_to(&mut self, head: Vec2<F>, look: Vec2<F>, viewport_half: Vec2<F>) {
        self.state.target = self.desired_target(head, look, viewport_half);
        self.state.offset = viewport_half.scale(F::one() - self.state.zoom);
    }
}
