//! Input capture and smoothing.
//!
//! Platform code fills one of the provided sources (or its own
//! [`InputSource`] impl) from device events. Each frame the simulation takes
//! an immutable [`InputSnapshot`] from whichever source is available and the
//! [`InputSmoother`] turns it into a unit movement direction and a look
//! direction.

use crate::config::MotionConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// How the raw move vector was produced. Selects the turn smoothing rate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Pointer offset from the viewport center.
    Pointer,
    /// Analog stick deflection.
    Stick,
}

/// Discrete look keys (WASD or arrows).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    /// Sum of the unit vectors of all held keys, in screen space (+y down).
    pub fn sum<F: Float>(&self) -> Vec2<F> {
        let one = F::one();
        let mut v = Vec2::zero();
        if self.up { v += Vec2::new(F::zero(), -one); }
        if self.left { v += Vec2::new(-one, F::zero()); }
        if self.down { v += Vec2::new(F::zero(), one); }
        if self.right { v += Vec2::new(one, F::zero()); }
        v
    }
}

/// Raw look input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LookInput<F: Float> {
    /// Second analog axis, used as-is.
    Axis(Vec2<F>),
    Keys(DirectionKeys),
}

/// Raw zoom input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ZoomRequest<F: Float> {
    /// Digital focus button: full zoom while held.
    Focus(bool),
    /// Analog trigger in `[-1, 1]` (released to fully pressed).
    Trigger(F),
}

/// Everything the simulation reads from input in one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputSnapshot<F: Float> {
    pub kind: InputKind,
    pub raw_move: Vec2<F>,
    pub look: LookInput<F>,
    pub growth: bool,
    pub boost: bool,
    pub zoom: ZoomRequest<F>,
}

impl<F: Float> InputSnapshot<F> {
    /// No intent at all: zero move, no look, no buttons.
    pub fn idle(kind: InputKind) -> Self {
        InputSnapshot {
            kind,
            raw_move: Vec2::zero(),
            look: LookInput::Keys(DirectionKeys::default()),
            growth: false,
            boost: false,
            zoom: ZoomRequest::Focus(false),
        }
    }

    pub fn with_move(mut self, raw_move: Vec2<F>) -> Self {
        self.raw_move = raw_move;
        self
    }

    pub fn with_look(mut self, look: LookInput<F>) -> Self {
        self.look = look;
        self
    }

    pub fn with_growth(mut self, growth: bool) -> Self {
        self.growth = growth;
        self
    }

    pub fn with_boost(mut self, boost: bool) -> Self {
        self.boost = boost;
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomRequest<F>) -> Self {
        self.zoom = zoom;
        self
    }
}

/// A device (or device family) the simulation can read from.
///
/// Vectors are in `[-1, 1]`-normalized device space except pointer offsets,
/// which only need the right direction.
pub trait InputSource<F: Float> {
    /// Whether this source should be used this frame (e.g. pad connected).
    fn is_available(&self) -> bool {
        true
    }

    fn kind(&self) -> InputKind;
    fn raw_move(&self) -> Vec2<F>;
    fn look(&self) -> LookInput<F>;
    /// True once per press. Reading it consumes the press.
    fn growth_triggered(&mut self) -> bool;
    fn boost_held(&self) -> bool;
    fn zoom(&self) -> ZoomRequest<F>;

    fn snapshot(&mut self) -> InputSnapshot<F> {
        InputSnapshot {
            kind: self.kind(),
            raw_move: self.raw_move(),
            look: self.look(),
            growth: self.growth_triggered(),
            boost: self.boost_held(),
            zoom: self.zoom(),
        }
    }
}

/// Snapshot of the first available source, in priority order.
pub fn select_snapshot<F: Float>(
    sources: &mut [&mut dyn InputSource<F>],
) -> Option<InputSnapshot<F>> {
    sources
        .iter_mut()
        .find(|source| source.is_available())
        .map(|source| source.snapshot())
}

/// Turns a held button into a once-per-press signal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    down: bool,
}

impl EdgeTrigger {
    /// Feed the current button state; true only on the frame it goes down.
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.down;
        self.down = down;
        pressed
    }
}

/// Keyboard and mouse state, updated by platform code.
#[derive(Clone, Debug)]
pub struct KeyboardMouse<F: Float> {
    /// Pointer position relative to the viewport center.
    pub pointer_offset: Vec2<F>,
    pub look_keys: DirectionKeys,
    /// Focus (zoom) key held.
    pub focus: bool,
    pub boost: bool,
    growth_pending: bool,
}

impl<F: Float> KeyboardMouse<F> {
    pub fn new() -> Self {
        KeyboardMouse {
            pointer_offset: Vec2::zero(),
            look_keys: DirectionKeys::default(),
            focus: false,
            boost: false,
            growth_pending: false,
        }
    }

    /// Record the pointer position in window pixels.
    pub fn set_pointer(&mut self, pointer: Vec2<F>, viewport_half: Vec2<F>) {
        self.pointer_offset = pointer - viewport_half;
    }

    /// Record a growth key press; consumed by the next snapshot.
    pub fn press_growth(&mut self) {
        self.growth_pending = true;
    }
}

impl<F: Float> Default for KeyboardMouse<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> InputSource<F> for KeyboardMouse<F> {
    fn kind(&self) -> InputKind {
        InputKind::Pointer
    }

    fn raw_move(&self) -> Vec2<F> {
        self.pointer_offset.normalize_or_zero()
    }

    fn look(&self) -> LookInput<F> {
        LookInput::Keys(self.look_keys)
    }

    fn growth_triggered(&mut self) -> bool {
        core::mem::take(&mut self.growth_pending)
    }

    fn boost_held(&self) -> bool {
        self.boost
    }

    fn zoom(&self) -> ZoomRequest<F> {
        ZoomRequest::Focus(self.focus)
    }
}

/// Gamepad state, updated by platform code.
#[derive(Clone, Debug)]
pub struct Gamepad<F: Float> {
    pub connected: bool,
    pub left_stick: Vec2<F>,
    pub right_stick: Vec2<F>,
    /// Left trigger axis in `[-1, 1]`.
    pub left_trigger: F,
    pub growth_button: bool,
    pub boost_button: bool,
    growth_edge: EdgeTrigger,
}

impl<F: Float> Gamepad<F> {
    pub fn new() -> Self {
        Gamepad {
            connected: true,
            left_stick: Vec2::zero(),
            right_stick: Vec2::zero(),
            left_trigger: -F::one(),
            growth_button: false,
            boost_button: false,
            growth_edge: EdgeTrigger::default(),
        }
    }
}

impl<F: Float> Default for Gamepad<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> InputSource<F> for Gamepad<F> {
    fn is_available(&self) -> bool {
        self.connected
    }

    fn kind(&self) -> InputKind {
        InputKind::Stick
    }

    fn raw_move(&self) -> Vec2<F> {
        self.left_stick
    }

    fn look(&self) -> LookInput<F> {
        LookInput::Axis(self.right_stick)
    }

    fn growth_triggered(&mut self) -> bool {
        self.growth_edge.update(self.growth_button)
    }

    fn boost_held(&self) -> bool {
        self.boost_button
    }

    fn zoom(&self) -> ZoomRequest<F> {
        ZoomRequest::Trigger(self.left_trigger)
    }
}

/// Smooths raw input into the movement and look directions.
#[derive(Clone, Debug, PartialEq)]
pub struct InputSmoother<F: Float> {
    movement: Vec2<F>,
    target: Vec2<F>,
    look: Vec2<F>,
    deadzone: F,
    pointer_turn_time: F,
    stick_turn_time: F,
}

impl<F: Float> InputSmoother<F> {
    /// Starts facing +x.
    pub fn new(config: &MotionConfig<F>) -> Self {
        let facing = Vec2::new(F::one(), F::zero());
        InputSmoother {
            movement: facing,
            target: facing,
            look: Vec2::zero(),
            deadzone: config.deadzone,
            pointer_turn_time: config.pointer_turn_time,
            stick_turn_time: config.stick_turn_time,
        }
    }

    pub fn movement_direction(&self) -> Vec2<F> {
        self.movement
    }

    pub fn look_direction(&self) -> Vec2<F> {
        self.look
    }

    /// Direction the movement is currently turning toward.
    pub fn target(&self) -> Vec2<F> {
        self.target
    }

    /// Face `direction` immediately. Degenerate directions are ignored.
    pub fn reset(&mut self, direction: Vec2<F>) {
        if let Ok(unit) = direction.try_normalize() {
            self.movement = unit;
            self.target = unit;
        }
    }

    pub fn update(&mut self, input: &InputSnapshot<F>, dt: F) {
        if input.raw_move.length() > self.deadzone {
            if let Ok(unit) = input.raw_move.try_normalize() {
                self.target = unit;
            }
        }

        let tau = match input.kind {
            InputKind::Pointer => self.pointer_turn_time,
            InputKind::Stick => self.stick_turn_time,
        };
        let blended = self.movement.lerp(self.target, F::smoothing(dt, tau));
        // Exactly opposite target can blend through zero; keep facing then.
        if let Ok(unit) = blended.try_normalize() {
            self.movement = unit;
        }

        self.look = match input.look {
            LookInput::Axis(axis) => axis,
            LookInput::Keys(keys) => {
                let sum = keys.sum::<F>();
                if sum.length() > self.deadzone {
                    sum.normalize_or_zero()
                } else {
                    Vec2::zero()
                }
            }
        };
    }
}
