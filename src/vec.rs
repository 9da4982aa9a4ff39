//! 2D vector type used for positions and directions.

use crate::error::MotionError;
use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub};

/// 2D vector in world (or device) space.
///
/// Screen conventions apply: +x is right, +y is down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn splat(value: F) -> Self { Vec2 { x: value, y: value } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Unit vector in the same direction, or `DegenerateDirection` when the
    /// length is too small (or not finite) to define one.
    pub fn try_normalize(self) -> Result<Self, MotionError> {
        let len = self.length();
        if !len.is_finite() || len.is_near_zero(F::from_f32(1e-10)) {
            Err(MotionError::DegenerateDirection)
        } else {
            Ok(self.scale(F::one() / len))
        }
    }

    /// Normalize to unit length. Returns the zero vector if degenerate.
    pub fn normalize_or_zero(self) -> Self {
        self.try_normalize().unwrap_or_else(|_| Self::zero())
    }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Linear interpolation: `self + (other - self) * t`.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// Perpendicular vector (rotated 90 degrees).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
