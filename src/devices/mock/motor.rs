//! Mock mecanum drive for testing

use crate::drivers::MecanumDriver;
use crate::error::Result;
use crate::types::DriveCommand;
use std::sync::{Arc, Mutex};

/// Mock mecanum drive that records every command it receives.
///
/// Clones share state, so a test can keep a handle for inspection while the
/// control loop owns the driver.
#[derive(Clone, Default)]
pub struct MockMecanumDriver {
    state: Arc<Mutex<MockDriveState>>,
}

#[derive(Debug, Default)]
struct MockDriveState {
    commands: Vec<DriveCommand>,
    stops: usize,
}

impl MockMecanumDriver {
    /// Create new mock drive
    pub fn new() -> Self {
        Self::default()
    }

    /// Last command received, if any.
    pub fn last_command(&self) -> Option<DriveCommand> {
        self.state.lock().unwrap().commands.last().copied()
    }

    /// All commands received so far.
    pub fn commands(&self) -> Vec<DriveCommand> {
        self.state.lock().unwrap().commands.clone()
    }

    /// Number of stop requests received.
    pub fn stop_count(&self) -> usize {
        self.state.lock().unwrap().stops
    }
}

impl MecanumDriver for MockMecanumDriver {
    fn compound_move(&mut self, cmd: &DriveCommand) -> Result<()> {
        self.state.lock().unwrap().commands.push(*cmd);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.state.lock().unwrap().stops += 1;
        Ok(())
    }
}
