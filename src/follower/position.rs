//! IR array position decoding.
//!
//! Turns one 16-cell binary reading into a signed offset from the array
//! center, or a sentinel fault when the hit pattern does not describe a
//! single line crossing. One hit gives the cell offset at double resolution;
//! two adjacent hits interpolate between the cells.

use crate::types::IrReading;

/// Scan order over the 16 cells.
///
/// Arrays are mounted facing four different directions; mirroring the scan
/// lets every side report offsets in the same robot-relative sign
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    LeftToRight,
    RightToLeft,
}

/// Non-nominal sensing conditions, carrying their raw sentinel values.
///
/// Sentinels sit past any decodable offset, so `raw() >= 16` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorFault {
    /// No cell sees the line
    LineLost = 16,
    /// More than three cells active at once
    TooManyHits = 17,
    /// Exactly three cells active
    WideContact = 18,
    /// Two active cells with a gap between them
    SplitContact = 19,
}

impl SensorFault {
    /// Raw sentinel value.
    #[inline]
    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// Decoded state of one array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePosition {
    /// Signed offset from the array center, at double resolution from
    /// adjacent-pair interpolation.
    Offset(i16),
    /// Sensing condition that yields no usable offset.
    Fault(SensorFault),
}

impl LinePosition {
    #[inline]
    pub fn is_fault(self) -> bool {
        matches!(self, LinePosition::Fault(_))
    }

    /// The fault, if any.
    #[inline]
    pub fn fault(self) -> Option<SensorFault> {
        match self {
            LinePosition::Fault(f) => Some(f),
            LinePosition::Offset(_) => None,
        }
    }
}

/// Decode one IR reading into a line position.
///
/// Collects the active cell indices in scan order, then classifies the hit
/// pattern. The offset arithmetic, including its slightly asymmetric range,
/// is a fixed contract with the error classifier and corrector.
pub fn decode(readings: &IrReading, direction: ScanDirection) -> LinePosition {
    let hits: Vec<usize> = readings
        .iter()
        .enumerate()
        .filter_map(|(index, &active)| active.then_some(index))
        .collect();

    match hits.len() {
        0 => return LinePosition::Fault(SensorFault::LineLost),
        3 => return LinePosition::Fault(SensorFault::WideContact),
        n if n > 3 => return LinePosition::Fault(SensorFault::TooManyHits),
        _ => {}
    }

    let mut state = (hits[0] * 2) as i16;
    if hits.len() == 2 {
        if hits[1] > 0 {
            state += 1;
        }
        if hits[0].abs_diff(hits[1]) > 1 {
            return LinePosition::Fault(SensorFault::SplitContact);
        }
    }

    let offset = state - 15;
    match direction {
        ScanDirection::LeftToRight => LinePosition::Offset(offset),
        ScanDirection::RightToLeft => LinePosition::Offset(-offset),
    }
}
