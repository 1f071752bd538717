//! End-to-end control loop tests over the mock rig.

use rekha_follow::config::ControlConfig;
use rekha_follow::devices::mock::{FixedHeading, LineSimulator, MockIrHub, MockMecanumDriver};
use rekha_follow::follower::{FaultCode, LineFollower, RunOutcome};
use rekha_follow::types::{IrReading, SensorFrame};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn single_hit(k: usize) -> IrReading {
    let mut r = [false; 16];
    r[k] = true;
    r
}

fn hits(indices: &[usize]) -> IrReading {
    let mut r = [false; 16];
    for &i in indices {
        r[i] = true;
    }
    r
}

/// Blank front/back with intact laterals: total line loss at heading south.
fn line_lost_frame() -> SensorFrame {
    SensorFrame {
        front: [false; 16],
        back: [false; 16],
        left: single_hit(7),
        right: single_hit(7),
    }
}

fn follower_with(hub: MockIrHub, drive: MockMecanumDriver, heading: u16) -> LineFollower {
    LineFollower::new(
        Box::new(hub),
        Box::new(drive.clone()),
        Box::new(FixedHeading(heading)),
        ControlConfig::default(),
    )
}

#[test]
fn nominal_cycle_then_line_loss() {
    // Heading south (270°): the front array faces forward. Line slightly
    // left of center front (index 7) and of center back (index 8), laterals
    // centered.
    let hub = MockIrHub::new(line_lost_frame());
    hub.push_frame(SensorFrame {
        front: single_hit(7),
        back: single_hit(8),
        left: single_hit(7),
        right: single_hit(7),
    });

    let drive = MockMecanumDriver::new();
    let mut follower = follower_with(hub, drive.clone(), 270);

    let running = AtomicBool::new(true);
    let outcome = follower.run(&running).unwrap();
    assert_eq!(outcome, RunOutcome::Halted(FaultCode::LineLost));
    assert_eq!(FaultCode::LineLost.code(), 9);

    // One nominal command before the halt. Index 7 decodes to offset -1
    // scanned left-to-right, index 8 to -1 scanned right-to-left; with a
    // pure proportional corrector at gain 1 both corrected errors are +1.
    let commands = drive.commands();
    assert_eq!(commands.len(), 1);
    let cmd = commands[0];
    assert_eq!(cmd.translate_speed, 100.0 - 1.0 / 16.0);
    assert_eq!(cmd.rotate_speed, 1.0 / 16.0);
    assert_eq!(cmd.translate_angle, 180.0 / 16.0);

    // Halt must leave the vehicle stopped
    assert_eq!(drive.stop_count(), 1);
}

#[test]
fn intersection_halts_with_code_10() {
    let hub = MockIrHub::new(SensorFrame {
        front: hits(&[2, 5, 9]),
        back: hits(&[0, 2]),
        left: single_hit(7),
        right: single_hit(7),
    });
    let drive = MockMecanumDriver::new();
    let mut follower = follower_with(hub, drive.clone(), 270);

    let running = AtomicBool::new(true);
    let outcome = follower.run(&running).unwrap();
    assert_eq!(outcome, RunOutcome::Halted(FaultCode::Intersection));
    assert_eq!(FaultCode::Intersection.code(), 10);
    assert!(drive.commands().is_empty());
}

#[test]
fn lateral_loss_beats_front_fault() {
    let hub = MockIrHub::new(SensorFrame {
        front: [false; 16],
        back: single_hit(8),
        left: [false; 16],
        right: single_hit(7),
    });
    let drive = MockMecanumDriver::new();
    let mut follower = follower_with(hub, drive.clone(), 270);

    let running = AtomicBool::new(true);
    let outcome = follower.run(&running).unwrap();
    assert_eq!(outcome, RunOutcome::Halted(FaultCode::LateralLoss));
    assert_eq!(FaultCode::LateralLoss.code(), -1);
}

#[test]
fn every_heading_follows_its_own_arrays() {
    // A frame that is only nominal when the mapping picks the right arrays:
    // all four arrays carry a centered line, so any permutation decodes, and
    // the loop runs until cancelled.
    let centered = SensorFrame {
        front: hits(&[7, 8]),
        back: hits(&[7, 8]),
        left: hits(&[7, 8]),
        right: hits(&[7, 8]),
    };

    for heading in [0u16, 90, 180, 270] {
        let hub = MockIrHub::new(centered);
        let drive = MockMecanumDriver::new();
        let mut follower = follower_with(hub, drive.clone(), heading);

        let running = Arc::new(AtomicBool::new(true));
        let stopper = Arc::clone(&running);
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            stopper.store(false, Ordering::Relaxed);
        });

        let outcome = follower.run(&running).unwrap();
        handle.join().unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled, "heading {}", heading);
        assert!(!drive.commands().is_empty(), "heading {}", heading);
        // Centered line: full speed, no rotation
        let cmd = drive.last_command().unwrap();
        assert_eq!(cmd.translate_speed, 100.0);
        assert_eq!(cmd.rotate_speed, 0.0);
        assert_eq!(cmd.translate_angle, 0.0);
        assert_eq!(drive.stop_count(), 1, "heading {}", heading);
    }
}

#[test]
fn simulated_line_runs_until_cancelled() {
    let sensors = LineSimulator::new(42, 0.2).with_sample_interval(Duration::from_millis(1));
    let drive = MockMecanumDriver::new();
    let mut follower = LineFollower::new(
        Box::new(sensors),
        Box::new(drive.clone()),
        Box::new(FixedHeading(90)),
        ControlConfig::default(),
    );

    let running = Arc::new(AtomicBool::new(true));
    let stopper = Arc::clone(&running);
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        stopper.store(false, Ordering::Relaxed);
    });

    let outcome = follower.run(&running).unwrap();
    handle.join().unwrap();

    assert_eq!(outcome, RunOutcome::Cancelled);
    assert!(drive.commands().len() > 1);
    for cmd in drive.commands() {
        assert!((0.0..=100.0).contains(&cmd.translate_speed));
        assert!((0.0..=100.0).contains(&cmd.rotate_speed));
        assert!((0.0..360.0).contains(&cmd.translate_angle));
    }
}
