//! Step notification for whoever renders or records the simulation

use flume::{Receiver, Sender};

use super::states::{System, NVec2};

/// Trait for observing completed simulation steps.
///
/// Passed into the `Simulation` when it is built; `on_step_complete` runs
/// once per `advance`, after positions, velocities and accelerations are
/// all consistent.
pub trait StepObserver {
    fn on_step_complete(&mut self, _sys: &System) {}

    fn on_start(&mut self) {}

    fn on_stop(&mut self) {}
}

/// Observer that ignores every notification.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Read-only copy of the body state at the end of a step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub step: u64,
    pub t: f64,
    pub positions: Vec<NVec2>,
    pub velocities: Vec<NVec2>,
}

impl Snapshot {
    pub fn capture(step: u64, sys: &System) -> Self {
        Self {
            step,
            t: sys.t,
            positions: sys.bodies.iter().map(|b| b.x).collect(),
            velocities: sys.bodies.iter().map(|b| b.v).collect(),
        }
    }
}

/// Sends a [`Snapshot`] over a channel after every step
///
/// A renderer on another thread drains the receiver; once it is dropped,
/// sends fail silently and stepping carries on.
pub struct ChannelObserver {
    tx: Sender<Snapshot>,
    step: u64,
}

impl ChannelObserver {
    /// Unbounded channel, the observer keeps the sending half
    pub fn new() -> (Self, Receiver<Snapshot>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx, step: 0 }, rx)
    }

    /// Bounded channel; when full the newest snapshot is dropped
    pub fn bounded(capacity: usize) -> (Self, Receiver<Snapshot>) {
        let (tx, rx) = flume::bounded(capacity);
        (Self { tx, step: 0 }, rx)
    }
}

impl StepObserver for ChannelObserver {
    fn on_step_complete(&mut self, sys: &System) {
        self.step += 1;
        if self.tx.is_disconnected() {
            return;
        }
        let _ = self.tx.try_send(Snapshot::capture(self.step, sys));
    }
}
