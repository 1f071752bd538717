//! IR sensor hub driver trait

use crate::error::Result;
use crate::types::SensorFrame;

/// IR photosensor hub driver trait
///
/// One hub exposes the four 16-cell arrays mounted on the vehicle's cardinal
/// sides.
pub trait IrSensorHub: Send {
    /// Sample all four cardinal arrays.
    ///
    /// Blocks until the hardware has produced a fresh reading for every
    /// array; the returned frame is captured on demand, never cached.
    fn read_all_arrays(&mut self) -> Result<SensorFrame>;
}
