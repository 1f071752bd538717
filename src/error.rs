//! Error types for RekhaFollow

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// RekhaFollow error types
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Heading outside the four supported compass values
    #[error("Invalid heading: {0}° (expected 0, 90, 180 or 270)")]
    InvalidHeading(u16),

    /// Sensor or actuator driver failure
    #[error("Driver error: {0}")]
    Driver(String),

    /// A control cycle exceeded the configured deadline
    #[error("Watchdog expired: cycle took {elapsed_ms}ms (limit {limit_ms}ms)")]
    WatchdogExpired {
        /// Measured cycle interval in milliseconds
        elapsed_ms: u64,
        /// Configured deadline in milliseconds
        limit_ms: u64,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}
