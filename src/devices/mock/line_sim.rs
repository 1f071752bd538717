//! Simulated line under the vehicle.
//!
//! Produces sensor frames for hardware-free runs: the line wanders as a
//! random walk across the front and back arrays while the lateral arrays
//! stay centered, so the control loop has something to chase.

use crate::drivers::IrSensorHub;
use crate::error::Result;
use crate::types::{IrReading, SensorFrame, IR_ARRAY_LEN};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::thread;
use std::time::Duration;

/// Keep the simulated line away from the array edges so every frame stays
/// decodable.
const POS_MIN: f32 = 1.0;
const POS_MAX: f32 = 14.0;

/// Simulated line feeding the four IR arrays.
pub struct LineSimulator {
    rng: SmallRng,
    /// Line center under the front array, in cells
    front_pos: f32,
    /// Line center under the back array, in cells
    back_pos: f32,
    /// Random-walk step size, cells per frame
    drift_stddev: f32,
    /// Blocking interval per read, like a real hub's sample period
    sample_interval: Duration,
}

impl LineSimulator {
    /// Create a simulator.
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64, drift_stddev: f32) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };

        Self {
            rng,
            front_pos: 7.5,
            back_pos: 7.5,
            drift_stddev,
            sample_interval: Duration::ZERO,
        }
    }

    /// Make every read block for `interval`, pacing the control loop the
    /// way a real hub's sample period would.
    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Produce the next frame, drifting the line a little.
    pub fn next_frame(&mut self) -> SensorFrame {
        self.front_pos = self.drift(self.front_pos);
        self.back_pos = self.drift(self.back_pos);

        SensorFrame {
            front: reading_at(self.front_pos),
            back: reading_at(self.back_pos),
            left: reading_at(7.5),
            right: reading_at(7.5),
        }
    }

    fn drift(&mut self, pos: f32) -> f32 {
        if self.drift_stddev == 0.0 {
            return pos;
        }
        let step: f32 = self.rng.sample(StandardNormal);
        (pos + step * self.drift_stddev).clamp(POS_MIN, POS_MAX)
    }
}

/// Reading with the one or two cells nearest `pos` active.
fn reading_at(pos: f32) -> IrReading {
    let mut reading = [false; IR_ARRAY_LEN];
    for (cell, active) in reading.iter_mut().enumerate() {
        *active = (cell as f32 - pos).abs() <= 0.75;
    }
    reading
}

impl IrSensorHub for LineSimulator {
    fn read_all_arrays(&mut self) -> Result<SensorFrame> {
        if !self.sample_interval.is_zero() {
            thread::sleep(self.sample_interval);
        }
        Ok(self.next_frame())
    }
}
