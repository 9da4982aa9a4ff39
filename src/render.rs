//! Read-only frame snapshot for renderers.

use crate::camera::CameraState;
use crate::chain::{SegmentChain, SegmentView};
use crate::float::Float;
use crate::vec::Vec2;

/// Everything a renderer needs to draw one frame. Borrowed from the
/// simulation between steps.
pub struct FrameView<'a, F: Float> {
    pub chain: &'a SegmentChain<F>,
    pub movement_direction: Vec2<F>,
    pub look_direction: Vec2<F>,
    pub thickness: F,
    /// True while a boost interval is running (speed-line overlay cue).
    pub boosting: bool,
    pub camera: CameraState<F>,
}

impl<'a, F: Float> FrameView<'a, F> {
    /// Segments tail to head, indexed from the head.
    pub fn segments(&self) -> impl Iterator<Item = SegmentView<F>> + 'a {
        self.chain.views()
    }

    pub fn head_position(&self) -> Vec2<F> {
        self.chain.head().position
    }
}

/// Consumer of frame snapshots.
pub trait Renderer<F: Float> {
    fn draw(&mut self, view: &FrameView<'_, F>);
}
