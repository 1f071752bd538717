//! Per-cycle consolidation of the four side states into one disposition.

use super::orientation::OrientationState;
use super::position::{LinePosition, SensorFault};

/// Control-loop disposition for one cycle.
///
/// The numeric codes are a stable contract with the surrounding system; use
/// [`FaultCode::code`] to export them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum FaultCode {
    /// A lateral array faulted; the vehicle is off-axis beyond recoverable
    /// correction
    LateralLoss = -1,
    /// All four sides decoded a usable offset
    Nominal = 0,
    /// Front array lost the line
    FrontLost = 1,
    /// Front array saw more than three hits
    FrontTooMany = 2,
    /// Front array saw exactly three hits
    FrontWide = 3,
    /// Front array saw two non-adjacent hits
    FrontSplit = 4,
    /// Back array lost the line
    BackLost = 5,
    /// Back array saw more than three hits
    BackTooMany = 6,
    /// Back array saw exactly three hits
    BackWide = 7,
    /// Back array saw two non-adjacent hits
    BackSplit = 8,
    /// Front and back both lost the line entirely
    LineLost = 9,
    /// Front and back both faulted on a crossing pattern
    Intersection = 10,
}

impl FaultCode {
    /// Raw disposition code.
    #[inline]
    pub fn code(self) -> i8 {
        self as i8
    }

    #[inline]
    pub fn is_nominal(self) -> bool {
        self == FaultCode::Nominal
    }
}

fn front_fault(fault: SensorFault) -> FaultCode {
    match fault {
        SensorFault::LineLost => FaultCode::FrontLost,
        SensorFault::TooManyHits => FaultCode::FrontTooMany,
        SensorFault::WideContact => FaultCode::FrontWide,
        SensorFault::SplitContact => FaultCode::FrontSplit,
    }
}

fn back_fault(fault: SensorFault) -> FaultCode {
    match fault {
        SensorFault::LineLost => FaultCode::BackLost,
        SensorFault::TooManyHits => FaultCode::BackTooMany,
        SensorFault::WideContact => FaultCode::BackWide,
        SensorFault::SplitContact => FaultCode::BackSplit,
    }
}

/// Classify one cycle's orientation state into a single disposition.
///
/// Runs every cycle regardless of heading. Precedence: lateral loss
/// dominates everything; a dual front/back fault dominates either single
/// side (total loss when both arrays are blank, intersection otherwise);
/// front faults take precedence over back faults. Exactly one code per
/// cycle.
pub fn classify(state: &OrientationState) -> FaultCode {
    if state.left.is_fault() || state.right.is_fault() {
        return FaultCode::LateralLoss;
    }

    match (state.front.fault(), state.back.fault()) {
        (Some(SensorFault::LineLost), Some(SensorFault::LineLost)) => FaultCode::LineLost,
        (Some(_), Some(_)) => FaultCode::Intersection,
        (Some(f), None) => front_fault(f),
        (None, Some(f)) => back_fault(f),
        (None, None) => FaultCode::Nominal,
    }
}
