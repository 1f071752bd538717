//! Configuration for the follower daemon.
//!
//! Loads configuration from a TOML file; every field has a default so a
//! partial file (or none at all) still yields a runnable setup.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub control: ControlConfig,
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Control-loop tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControlConfig {
    /// Proportional gain, both axes
    #[serde(default = "default_kp")]
    pub kp: f32,

    /// Integral gain
    #[serde(default = "default_ki")]
    pub ki: f32,

    /// Derivative gain
    #[serde(default = "default_kd")]
    pub kd: f32,

    /// Per-cycle deadline in milliseconds; 0 disables the watchdog
    #[serde(default = "default_watchdog_timeout_ms")]
    pub watchdog_timeout_ms: u64,
}

/// Vehicle state at loop start
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RobotConfig {
    /// Compass heading in degrees; must be 0, 90, 180 or 270
    #[serde(default = "default_heading_degrees")]
    pub heading_degrees: u16,
}

/// Mock rig parameters for hardware-free runs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Interval between simulated sensor frames (milliseconds)
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,

    /// RNG seed for the line simulator; 0 draws entropy
    #[serde(default)]
    pub seed: u64,

    /// Standard deviation of simulated line drift per frame (cells)
    #[serde(default = "default_drift_stddev")]
    pub drift_stddev: f32,
}

// Default value functions
fn default_kp() -> f32 {
    1.0
}
fn default_ki() -> f32 {
    0.0
}
fn default_kd() -> f32 {
    0.0
}
fn default_watchdog_timeout_ms() -> u64 {
    250
}
fn default_heading_degrees() -> u16 {
    270
}
fn default_sample_interval_ms() -> u64 {
    20
}
fn default_drift_stddev() -> f32 {
    0.2
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            kp: default_kp(),
            ki: default_ki(),
            kd: default_kd(),
            watchdog_timeout_ms: default_watchdog_timeout_ms(),
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            heading_degrees: default_heading_degrees(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
            seed: 0,
            drift_stddev: default_drift_stddev(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
