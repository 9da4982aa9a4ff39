//! Error types for chain and simulation operations.

use core::fmt;

/// Errors that can occur in the motion core.
///
/// None of these come from I/O. `ChainUnderflow` and `DegenerateDirection`
/// are invariant violations; the rest are raised while validating
/// construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Attempted to remove the last remaining segment.
    ChainUnderflow { len: usize },
    /// A unit vector was required but the input had (near) zero length.
    DegenerateDirection,
    /// Segment count must be positive and total length positive and finite.
    InvalidChain,
    /// A configuration value is out of its valid range.
    InvalidConfig(&'static str),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::ChainUnderflow { len } => {
                write!(f, "cannot shrink chain of {} segment(s) any further", len)
            }
            MotionError::DegenerateDirection => write!(f, "direction vector has zero length"),
            MotionError::InvalidChain => {
                write!(f, "chain needs at least one segment and a positive total length")
            }
            MotionError::InvalidConfig(field) => write!(f, "invalid configuration: {}", field),
        }
    }
}

impl core::error::Error for MotionError {}
