//! Line-following control loop.
//!
//! Each cycle samples the IR hub, orients the four arrays for the current
//! heading, classifies the result, and either halts on a fault or corrects
//! the front/back offsets into a compound move for the drive. The loop never
//! terminates on its own under nominal conditions; it ends only on a
//! classified fault or through the caller's cancellation flag.

mod classifier;
mod motion;
mod orientation;
mod pid;
mod position;

pub use classifier::{classify, FaultCode};
pub use motion::translate;
pub use orientation::{orient, Heading, OrientationState};
pub use pid::Pid;
pub use position::{decode, LinePosition, ScanDirection, SensorFault};

use crate::config::ControlConfig;
use crate::drivers::{HeadingSource, IrSensorHub, MecanumDriver};
use crate::error::{Error, Result};
use crate::types::DriveCommand;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Hook invoked after the loop halts on a classified fault and the drive has
/// been stopped. Recovery policy belongs to the surrounding system.
pub type RecoveryHook = Box<dyn FnMut(FaultCode) + Send>;

/// Control loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Ready or actively cycling
    Running,
    /// Halted on a classified fault; requires external recovery
    Halted(FaultCode),
}

/// Result of a single control cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// Nominal cycle; this command was sent to the drive
    Commanded(DriveCommand),
    /// Classified fault; the loop must halt
    Halted(FaultCode),
}

/// How a loop invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run flag dropped
    Cancelled,
    /// A classified fault halted the loop
    Halted(FaultCode),
}

/// Line-following control loop.
///
/// Owns one corrector per axis and the three collaborator seams. All of the
/// per-cycle pipeline is pure; only corrector state and the previous cycle's
/// timestamp persist across cycles.
pub struct LineFollower {
    sensors: Box<dyn IrSensorHub>,
    drive: Box<dyn MecanumDriver>,
    heading_source: Box<dyn HeadingSource>,
    config: ControlConfig,
    front_pid: Pid,
    back_pid: Pid,
    state: LoopState,
    recovery_hook: Option<RecoveryHook>,
    /// Last cycle debug log time (for throttling)
    last_cycle_log: Option<Instant>,
}

impl LineFollower {
    /// Create a follower over the given collaborators.
    pub fn new(
        sensors: Box<dyn IrSensorHub>,
        drive: Box<dyn MecanumDriver>,
        heading_source: Box<dyn HeadingSource>,
        config: ControlConfig,
    ) -> Self {
        let front_pid = Pid::new(config.kp, config.ki, config.kd);
        let back_pid = Pid::new(config.kp, config.ki, config.kd);

        Self {
            sensors,
            drive,
            heading_source,
            config,
            front_pid,
            back_pid,
            state: LoopState::Running,
            recovery_hook: None,
            last_cycle_log: None,
        }
    }

    /// Install a hook to be invoked when the loop halts on a fault.
    pub fn set_recovery_hook(&mut self, hook: RecoveryHook) {
        self.recovery_hook = Some(hook);
    }

    /// Current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run the loop until a classified fault halts it or `running` drops.
    ///
    /// The heading is read once at entry and validated; reorientation
    /// happens between invocations, not during one. Both correctors are
    /// reconfigured from the gains in config, so a new invocation starts
    /// from clean corrector state. On every exit path the drive is stopped
    /// before control returns.
    pub fn run(&mut self, running: &AtomicBool) -> Result<RunOutcome> {
        let degrees = self.heading_source.current_heading();
        let heading = Heading::from_degrees(degrees)?;

        self.front_pid
            .configure(self.config.kp, self.config.ki, self.config.kd);
        self.back_pid
            .configure(self.config.kp, self.config.ki, self.config.kd);
        self.state = LoopState::Running;

        log::info!(
            "LineFollower: starting at heading {}° (kp={}, ki={}, kd={})",
            heading.degrees(),
            self.config.kp,
            self.config.ki,
            self.config.kd
        );

        let outcome = self.run_cycles(heading, running);

        // Bring the vehicle to rest before any recovery policy runs; a halt
        // must not leave the drive executing the last stale command.
        if let Err(e) = self.drive.stop() {
            log::error!("LineFollower: drive stop on exit failed: {}", e);
        }

        match outcome {
            Ok(RunOutcome::Cancelled) => log::info!("LineFollower: cancelled"),
            Ok(RunOutcome::Halted(code)) => {
                log::warn!(
                    "LineFollower: halted on fault {:?} (code {})",
                    code,
                    code.code()
                );
                if let Some(hook) = self.recovery_hook.as_mut() {
                    hook(code);
                }
            }
            Err(ref e) => log::error!("LineFollower: loop error: {}", e),
        }

        outcome
    }

    fn run_cycles(&mut self, heading: Heading, running: &AtomicBool) -> Result<RunOutcome> {
        let started = Instant::now();
        let mut previous = started;

        while running.load(Ordering::Relaxed) {
            let now = Instant::now();
            let dt = now.duration_since(previous).as_secs_f32();

            match self.step(heading, dt)? {
                CycleOutcome::Commanded(_) => {}
                CycleOutcome::Halted(code) => return Ok(RunOutcome::Halted(code)),
            }

            previous = now;
        }

        Ok(RunOutcome::Cancelled)
    }

    /// Execute one control cycle: sample, orient, classify, correct, drive.
    ///
    /// `dt` is the corrector integration interval for this cycle in seconds.
    /// Exposed so embedders can drive their own pacing and halt policy; the
    /// caller is responsible for stopping the drive when it stops cycling.
    pub fn step(&mut self, heading: Heading, dt: f32) -> Result<CycleOutcome> {
        self.check_watchdog(dt)?;

        let frame = self.sensors.read_all_arrays()?;
        let state = orient(heading, &frame);

        let code = classify(&state);
        let (LinePosition::Offset(front), LinePosition::Offset(back)) = (state.front, state.back)
        else {
            // Any front/back fault classifies non-nominal
            self.state = LoopState::Halted(code);
            return Ok(CycleOutcome::Halted(code));
        };
        if !code.is_nominal() {
            self.state = LoopState::Halted(code);
            return Ok(CycleOutcome::Halted(code));
        }

        let front_error = self.front_pid.update(0.0, front as f32, dt);
        let back_error = self.back_pid.update(0.0, back as f32, dt);

        let cmd = translate(front_error, back_error);

        let should_log = if let Some(last) = self.last_cycle_log {
            last.elapsed() >= Duration::from_secs(1)
        } else {
            true
        };
        if should_log {
            log::debug!(
                "LineFollower: front={} back={} -> speed={:.1} angle={:.1} rotate={:.1}",
                front,
                back,
                cmd.translate_speed,
                cmd.translate_angle,
                cmd.rotate_speed
            );
            self.last_cycle_log = Some(Instant::now());
        }

        self.drive.compound_move(&cmd)?;

        Ok(CycleOutcome::Commanded(cmd))
    }

    /// Fail the cycle if its interval blew the configured deadline; a stale
    /// `dt` must never reach the correctors.
    fn check_watchdog(&self, dt: f32) -> Result<()> {
        if self.config.watchdog_timeout_ms == 0 {
            return Ok(());
        }
        let elapsed_ms = (dt * 1000.0) as u64;
        if elapsed_ms > self.config.watchdog_timeout_ms {
            return Err(Error::WatchdogExpired {
                elapsed_ms,
                limit_ms: self.config.watchdog_timeout_ms,
            });
        }
        Ok(())
    }
}
