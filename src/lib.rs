//! Motion core for segmented creatures in games.
//!
//! `slither` simulates a snake-like body: a chain of segments that trails a
//! steerable head, grows on demand and burns tail segments for speed boosts,
//! plus the smoothed input and camera follow that go with it. Rendering,
//! windowing and device polling stay with the host.
//!
//! # Features
//!
//! - **Arena chain**: O(1) growth at either end, O(1) shrink at the tail
//! - **Trailing solver**: elastic catch-up proportional to lag, sub-stepped so
//!   long frames stay stable
//! - **Input smoothing**: deadzone, per-device turn rates, key or stick look
//! - **Camera follow**: smoothed zoom and target with zoom-invariant look-ahead
//! - **Observable**: monitor steps via the `StepObserver` trait or the `log`
//!   facade
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod chain;
pub mod solver;
pub mod input;
pub mod camera;
pub mod clock;
pub mod render;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use chain::{ChainConfig, Segment, SegmentChain, SegmentId, SegmentView};
pub use solver::{ChainSolver, SolveStats};
pub use input::{
    select_snapshot, DirectionKeys, EdgeTrigger, Gamepad, InputKind, InputSmoother,
    InputSnapshot, InputSource, KeyboardMouse, LookInput, ZoomRequest,
};
pub use camera::{CameraFollow, CameraState};
pub use clock::{Clock, FixedClock, TimestampClock};
pub use render::{FrameView, Renderer};
pub use simulation::{MotionState, Simulation};
pub use config::MotionConfig;
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::MotionError;
