use slither::{
    ChainConfig, Clock, InputSource, KeyboardMouse, LogStepObserver, MotionConfig, Simulation,
    TimestampClock, Vec2,
};
use wasm_bindgen::prelude::*;

// ---- Snake Demo ----

#[wasm_bindgen]
pub struct SnakeDemo {
    sim: Simulation<f32>,
    keys: KeyboardMouse<f32>,
    clock: TimestampClock<f32>,
    viewport_half: Vec2<f32>,
}

#[wasm_bindgen]
impl SnakeDemo {
    /// `classic` disables growth and boost.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, classic: bool) -> Result<SnakeDemo, JsError> {
        let config = if classic { MotionConfig::classic() } else { MotionConfig::new() };
        let sim = Simulation::new(&ChainConfig::default(), config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let mut demo = SnakeDemo {
            sim,
            keys: KeyboardMouse::new(),
            clock: TimestampClock::new(),
            viewport_half: Vec2::new(width * 0.5, height * 0.5),
        };
        let head = demo.sim.chain().head().position;
        demo.sim.camera_mut().snap_to(head, Vec2::zero(), demo.viewport_half);
        Ok(demo)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_half = Vec2::new(width * 0.5, height * 0.5);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.keys.set_pointer(Vec2::new(x, y), self.viewport_half);
    }

    pub fn set_look_keys(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.keys.look_keys.up = up;
        self.keys.look_keys.down = down;
        self.keys.look_keys.left = left;
        self.keys.look_keys.right = right;
    }

    pub fn set_focus(&mut self, held: bool) {
        self.keys.focus = held;
    }

    pub fn set_boost(&mut self, held: bool) {
        self.keys.boost = held;
    }

    pub fn press_growth(&mut self) {
        self.keys.press_growth();
    }

    /// Advance by an explicit delta in seconds.
    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        let input = self.keys.snapshot();
        self.sim
            .step(&input, dt, self.viewport_half, &mut LogStepObserver)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Advance from a `requestAnimationFrame` timestamp in milliseconds.
    pub fn frame(&mut self, timestamp_ms: f32) -> Result<(), JsError> {
        self.clock.set_now(timestamp_ms / 1000.0);
        let dt = self.clock.elapsed_since_last_frame();
        self.update(dt)
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions, tail first.
    pub fn positions(&self) -> Vec<f32> {
        let view = self.sim.frame_view();
        let mut out = Vec::with_capacity(view.chain.len() * 2);
        for segment in view.segments() {
            out.push(segment.position.x);
            out.push(segment.position.y);
        }
        out
    }

    /// Returns [zoom, target_x, target_y, offset_x, offset_y]
    pub fn camera(&self) -> Vec<f32> {
        let c = self.sim.camera();
        vec![c.zoom, c.target.x, c.target.y, c.offset.x, c.offset.y]
    }

    /// Returns [move_x, move_y, look_x, look_y]
    pub fn directions(&self) -> Vec<f32> {
        let m = self.sim.motion();
        vec![
            m.movement_direction.x,
            m.movement_direction.y,
            m.look_direction.x,
            m.look_direction.y,
        ]
    }

    pub fn boosting(&self) -> bool {
        self.sim.is_boosting()
    }

    pub fn thickness(&self) -> f32 {
        self.sim.chain().thickness()
    }

    pub fn segment_count(&self) -> usize {
        self.sim.chain().len()
    }
}
