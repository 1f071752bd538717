//! RekhaFollow - line-following control core for a four-sided mecanum robot
//!
//! Converts raw IR photosensor arrays into heading-relative positional
//! errors, corrects them per axis with a PID, and emits bounded compound
//! moves until a line-loss or intersection condition halts the loop.
//!
//! Hardware is reached only through the traits in [`drivers`]; the
//! [`devices::mock`] rig implements them for tests and hardware-free runs.

pub mod config;
pub mod devices;
pub mod drivers;
pub mod error;
pub mod follower;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
pub use follower::LineFollower;
