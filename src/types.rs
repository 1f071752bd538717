//! Core data types shared by drivers and the control loop.

/// Number of photosensor cells in one IR array.
pub const IR_ARRAY_LEN: usize = 16;

/// One IR array's binary readings. Index 0 is one physical edge of the array.
pub type IrReading = [bool; IR_ARRAY_LEN];

/// The four cardinal IR arrays sampled in the same control cycle.
///
/// Produced fresh by the sensor hub each cycle; the control core never
/// retains a frame across cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorFrame {
    pub front: IrReading,
    pub back: IrReading,
    pub left: IrReading,
    pub right: IrReading,
}

/// A single compound actuator command.
///
/// Combines translational speed, translation direction, and rotational
/// speed. Fire-and-forget: the drive applies it until the next command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveCommand {
    /// Translational speed, percent of maximum [0, 100]
    pub translate_speed: f32,

    /// Rotational speed, percent of maximum [0, 100]
    pub rotate_speed: f32,

    /// Translation direction in degrees [0, 360)
    pub translate_angle: f32,
}
