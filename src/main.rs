//! RekhaFollow - line-following control daemon
//!
//! Runs the control loop against the simulated rig; real deployments
//! implement the driver traits against their sensor and motor hardware and
//! wire them up the same way.

use rekha_follow::config::AppConfig;
use rekha_follow::devices::mock::{FixedHeading, LineSimulator, MockMecanumDriver};
use rekha_follow::error::{Error, Result};
use rekha_follow::follower::{LineFollower, RunOutcome};

use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `rekha-follow <path>` (positional)
/// - `rekha-follow --config <path>` (flag-based)
/// - `rekha-follow -c <path>` (short flag)
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    // Look for --config or -c flag
    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    // Fall back to first positional argument (if it doesn't start with -)
    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}

/// Load the config file named on the command line, or `rekha.toml` when
/// present, or fall back to defaults.
fn load_config() -> Result<AppConfig> {
    if let Some(path) = parse_config_path() {
        log::info!("Using config: {}", path);
        return AppConfig::from_file(path);
    }

    if Path::new("rekha.toml").exists() {
        log::info!("Using config: rekha.toml");
        return AppConfig::from_file("rekha.toml");
    }

    log::info!("Using default configuration");
    Ok(AppConfig::default())
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("RekhaFollow v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    log::info!(
        "Heading {}°, gains kp={} ki={} kd={}, watchdog {}ms",
        config.robot.heading_degrees,
        config.control.kp,
        config.control.ki,
        config.control.kd,
        config.control.watchdog_timeout_ms
    );

    // Set up shutdown signal handler
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);

    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    // Simulated rig; swap these for hardware driver implementations
    let sensors = LineSimulator::new(config.simulation.seed, config.simulation.drift_stddev)
        .with_sample_interval(Duration::from_millis(config.simulation.sample_interval_ms));
    let drive = MockMecanumDriver::new();
    let heading = FixedHeading(config.robot.heading_degrees);

    let mut follower = LineFollower::new(
        Box::new(sensors),
        Box::new(drive.clone()),
        Box::new(heading),
        config.control.clone(),
    );
    follower.set_recovery_hook(Box::new(|code| {
        log::warn!("Recovery hook: fault {:?}, awaiting operator", code);
    }));

    log::info!("RekhaFollow running. Press Ctrl-C to stop.");

    match follower.run(&running)? {
        RunOutcome::Cancelled => {
            log::info!("Stopped by operator after {} commands", drive.commands().len());
        }
        RunOutcome::Halted(code) => {
            log::warn!(
                "Halted on fault {:?} (code {}) after {} commands",
                code,
                code.code(),
                drive.commands().len()
            );
        }
    }

    log::info!("RekhaFollow stopped");
    Ok(())
}
