//! Floating-point abstraction so the motion core runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations the simulation needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, which keeps the crate
/// usable without `std`.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Natural exponential (e^self).
    fn exp(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Smallest integer value not below self.
    fn ceil(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Lossy conversion used for sub-step counts and host interop.
    fn to_f32(self) -> f32;

    /// Clamp to `[min, max]`.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Linear interpolation: `self + (other - self) * t`.
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// Blend weight for exponential smoothing toward a target over `dt`
    /// with time constant `tau`.
    ///
    /// Always in `[0, 1]`, so a long frame lands on the target instead of
    /// overshooting it. A non-positive `tau` snaps immediately.
    fn smoothing(dt: Self, tau: Self) -> Self {
        if tau <= Self::zero() {
            return Self::one();
        }
        (Self::one() - (-(dt / tau)).exp()).clamp(Self::zero(), Self::one())
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn exp(self) -> Self { libm::expf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn ceil(self) -> Self { libm::ceilf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn to_f32(self) -> f32 { self }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn exp(self) -> Self { libm::exp(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn ceil(self) -> Self { libm::ceil(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn to_f32(self) -> f32 { self as f32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_stays_in_unit_range() {
        assert_eq!(f32::smoothing(0.0, 0.2), 0.0);
        assert!(f32::smoothing(1000.0, 0.2) <= 1.0);
        assert!((f32::smoothing(1000.0, 0.2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn smoothing_matches_linear_rate_for_small_steps() {
        let dt = 1.0f64 / 1000.0;
        let w = f64::smoothing(dt, 0.2);
        assert!((w - dt / 0.2).abs() < 1e-4);
    }

    #[test]
    fn zero_time_constant_snaps() {
        assert_eq!(f32::smoothing(0.016, 0.0), 1.0);
    }
}
