//! Heading-relative orientation of the four IR arrays.
//!
//! The arrays are fixed to the chassis, so which physical array faces the
//! direction of travel depends on the vehicle's compass heading. Each
//! heading selects a fixed permutation of the arrays together with the scan
//! direction that keeps every side's offset sign consistent.

use crate::error::{Error, Result};
use crate::types::SensorFrame;

use super::position::{decode, LinePosition, ScanDirection};

/// Vehicle compass heading, one of four 90°-spaced values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// 0°
    West,
    /// 90°
    North,
    /// 180°
    East,
    /// 270°
    South,
}

impl Heading {
    /// Parse a raw heading in degrees.
    ///
    /// Anything outside the four canonical values is a configuration error;
    /// callers must fail before the control loop starts rather than default
    /// silently.
    pub fn from_degrees(degrees: u16) -> Result<Heading> {
        match degrees {
            0 => Ok(Heading::West),
            90 => Ok(Heading::North),
            180 => Ok(Heading::East),
            270 => Ok(Heading::South),
            other => Err(Error::InvalidHeading(other)),
        }
    }

    /// Heading in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Heading::West => 0,
            Heading::North => 90,
            Heading::East => 180,
            Heading::South => 270,
        }
    }
}

/// Decoded line positions for the four robot-relative sides.
///
/// Recomputed every cycle; never persisted across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationState {
    pub front: LinePosition,
    pub back: LinePosition,
    pub left: LinePosition,
    pub right: LinePosition,
}

/// Assign the four cardinal arrays to robot-relative sides for a heading.
pub fn orient(heading: Heading, frame: &SensorFrame) -> OrientationState {
    use ScanDirection::{LeftToRight, RightToLeft};

    match heading {
        Heading::West => OrientationState {
            front: decode(&frame.left, LeftToRight),
            back: decode(&frame.right, RightToLeft),
            left: decode(&frame.back, LeftToRight),
            right: decode(&frame.front, RightToLeft),
        },
        Heading::East => OrientationState {
            front: decode(&frame.right, LeftToRight),
            back: decode(&frame.left, RightToLeft),
            left: decode(&frame.front, LeftToRight),
            right: decode(&frame.back, RightToLeft),
        },
        Heading::South => OrientationState {
            front: decode(&frame.front, LeftToRight),
            back: decode(&frame.back, RightToLeft),
            left: decode(&frame.left, LeftToRight),
            right: decode(&frame.right, RightToLeft),
        },
        Heading::North => OrientationState {
            front: decode(&frame.back, LeftToRight),
            back: decode(&frame.front, RightToLeft),
            left: decode(&frame.right, LeftToRight),
            right: decode(&frame.left, RightToLeft),
        },
    }
}
