//! Closed-loop corrector, one instance per control axis.

/// PID controller over explicitly supplied sampling intervals.
///
/// The loop passes the measured inter-cycle interval to every update, so the
/// integral and derivative terms track wall-clock time regardless of cycle
/// jitter.
#[derive(Debug, Clone)]
pub struct Pid {
    kp: f32,
    ki: f32,
    kd: f32,
    /// Accumulated integral term
    integral: f32,
    /// Error from the previous update
    prev_error: f32,
    /// Whether prev_error holds a real sample yet
    primed: bool,
}

impl Pid {
    /// Create a controller with the given gains.
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: 0.0,
            prev_error: 0.0,
            primed: false,
        }
    }

    /// Replace the gains and clear accumulated state.
    pub fn configure(&mut self, kp: f32, ki: f32, kd: f32) {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self.reset();
    }

    /// Clear accumulated state.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
        self.primed = false;
    }

    /// Advance the controller by one sample and return the corrected error.
    ///
    /// `dt` is the elapsed interval in seconds. The derivative term is
    /// suppressed on the first sample after a reset and whenever `dt` is not
    /// positive.
    pub fn update(&mut self, target: f32, measured: f32, dt: f32) -> f32 {
        let error = target - measured;

        self.integral += error * dt;
        let derivative = if self.primed && dt > 0.0 {
            (error - self.prev_error) / dt
        } else {
            0.0
        };

        self.primed = true;
        self.prev_error = error;

        self.kp * error + self.ki * self.integral + self.kd * derivative
    }
}
