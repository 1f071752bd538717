//! Mecanum drive driver trait

use crate::error::Result;
use crate::types::DriveCommand;

/// Mecanum drive controller trait
pub trait MecanumDriver: Send {
    /// Execute a compound move (translation plus rotation).
    ///
    /// Fire-and-forget: the drive applies the command until the next one
    /// arrives.
    fn compound_move(&mut self, cmd: &DriveCommand) -> Result<()>;

    /// Stop all motion immediately.
    fn stop(&mut self) -> Result<()>;
}
