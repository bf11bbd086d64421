//! Background scheduler that repeatedly calls `Simulation::advance`
//!
//! The simulation lives behind a `parking_lot::Mutex`; the driver thread
//! holds the lock for a whole `advance`, so a reader that takes the same lock
//! only ever sees complete steps. `stop()` on the simulation is checked under
//! the lock before every step, so it takes effect before the next advance.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};
use parking_lot::Mutex;

use super::engine::Simulation;

pub type SharedSimulation = Arc<Mutex<Simulation>>;

/// Wrap a simulation for sharing between the driver and readers
pub fn shared(sim: Simulation) -> SharedSimulation {
    Arc::new(Mutex::new(sim))
}

/// How the driver chooses `dt` for each call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPolicy {
    /// Pass the measured wall-clock time since the previous tick, so simulated
    /// time tracks real time whatever the tick rate
    WallClock { interval: Duration },
    /// Pass a constant `dt` every tick, deterministic but drifts from real time
    /// when ticks run late
    Fixed { dt: f64, interval: Duration },
}

impl StepPolicy {
    pub fn interval(&self) -> Duration {
        match *self {
            StepPolicy::WallClock { interval } => interval,
            StepPolicy::Fixed { interval, .. } => interval,
        }
    }
}

impl Default for StepPolicy {
    fn default() -> Self {
        StepPolicy::WallClock { interval: Duration::from_millis(1) }
    }
}

pub struct Driver {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Driver {
    /// Start the stepping thread. It only advances while the simulation is running
    pub fn spawn(sim: SharedSimulation, policy: StepPolicy) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("gravsim-driver".into())
            .spawn(move || run_loop(sim, policy, flag))?;

        debug!("driver spawned with {:?}", policy);
        Ok(Self {
            shutdown,
            handle: Some(handle),
        })
    }

    /// Signal the thread and wait for it. A step already under way finishes first
    pub fn shutdown(mut self) {
        self.join();
    }

    fn join(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("driver thread panicked");
            }
            debug!("driver joined");
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.join();
    }
}

fn run_loop(sim: SharedSimulation, policy: StepPolicy, shutdown: Arc<AtomicBool>) {
    let mut last = Instant::now();

    while !shutdown.load(Ordering::Acquire) {
        thread::sleep(policy.interval());

        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        let mut guard = sim.lock();
        if !guard.is_running() {
            continue;
        }

        let dt = match policy {
            StepPolicy::WallClock { .. } => elapsed.as_secs_f64(),
            StepPolicy::Fixed { dt, .. } => dt,
        };
        if dt <= 0.0 {
            continue;
        }

        if let Err(e) = guard.advance(dt) {
            warn!("driver skipped a step: {}", e);
        }
    }
}
