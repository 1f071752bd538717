//! Mock IR sensor hub

use crate::drivers::IrSensorHub;
use crate::error::Result;
use crate::types::SensorFrame;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock IR hub replaying scripted frames.
///
/// Pops queued frames in order, then keeps returning the steady frame.
/// Clones share state, so a test can queue frames after the control loop
/// has taken ownership of the hub.
#[derive(Clone)]
pub struct MockIrHub {
    state: Arc<Mutex<MockIrState>>,
}

struct MockIrState {
    queued: VecDeque<SensorFrame>,
    steady: SensorFrame,
}

impl MockIrHub {
    /// Hub that returns `steady` once the queue drains.
    pub fn new(steady: SensorFrame) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockIrState {
                queued: VecDeque::new(),
                steady,
            })),
        }
    }

    /// Queue a frame to be returned before the steady frame.
    pub fn push_frame(&self, frame: SensorFrame) {
        self.state.lock().unwrap().queued.push_back(frame);
    }

    /// Replace the steady frame.
    pub fn set_steady(&self, frame: SensorFrame) {
        self.state.lock().unwrap().steady = frame;
    }
}

impl IrSensorHub for MockIrHub {
    fn read_all_arrays(&mut self) -> Result<SensorFrame> {
        let mut state = self.state.lock().unwrap();
        let frame = state.queued.pop_front().unwrap_or(state.steady);
        Ok(frame)
    }
}
