//! The runtime simulation object
//!
//! `Simulation` owns the body collection, the active force set and the
//! per-step scratch buffer, and exposes `advance` as the only way to move
//! the system forward in time. `start`/`stop` do no timing of their own,
//! they only tell a scheduler (see `driver`) whether it may call `advance`.
//! `advance` itself works in either state.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::error::SimError;
use crate::simulation::forces::{ForceSet, NewtonianGravity, PairForce};
use crate::simulation::integrator::{compute_accelerations, symplectic_euler, velocity_verlet};
use crate::simulation::observer::{NoOpStepObserver, StepObserver};
use crate::simulation::params::{Integrator, Parameters};
use crate::simulation::states::{Body, System, NVec2};

pub struct Simulation {
    system: System,
    parameters: Parameters,
    forces: ForceSet,
    scratch: Vec<NVec2>, // net force per body, valid during one step only
    observer: Box<dyn StepObserver + Send>,
    running: bool,
    steps: u64,
    accelerations_fresh: bool, // verlet needs a_n for the current positions
    reported_non_finite: bool,
}

impl Simulation {
    /// Empty, stopped simulation with Newtonian gravity registered
    pub fn new(parameters: Parameters) -> Self {
        let forces = ForceSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps2: parameters.eps2,
        });

        Self {
            system: System::default(),
            parameters,
            forces,
            scratch: Vec::new(),
            observer: Box::new(NoOpStepObserver),
            running: false,
            steps: 0,
            accelerations_fresh: false,
            reported_non_finite: false,
        }
    }

    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: StepObserver + Send + 'static,
    {
        self.observer = Box::new(observer);
        self
    }

    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.parameters.integrator = integrator;
        self
    }

    /// Register an extra force law next to gravity
    pub fn with_force<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.forces.push(term);
        self.accelerations_fresh = false;
        self
    }

    /// Append a body, returning its index
    pub fn add_body(&mut self, body: Body) -> usize {
        let idx = self.system.bodies.len();
        self.system.bodies.push(body);
        self.accelerations_fresh = false;
        idx
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.system.bodies.get(index)
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.system.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system.bodies.is_empty()
    }

    /// Accumulated simulated time
    pub fn time(&self) -> f64 {
        self.system.t
    }

    /// Completed `advance` calls
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.system.total_momentum()
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        debug!("simulation started with {} bodies", self.len());
        self.running = true;
        self.observer.on_start();
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        debug!("simulation stopped at t = {} after {} steps", self.system.t, self.steps);
        self.running = false;
        self.observer.on_stop();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the system by `dt` seconds of simulated time and notify the
    /// observer once the step is complete
    pub fn advance(&mut self, dt: f64) -> Result<(), SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }

        match self.parameters.integrator {
            Integrator::SymplecticEuler => {
                symplectic_euler(&mut self.system, &self.forces, &mut self.scratch, dt);
            }
            Integrator::VelocityVerlet => {
                if !self.accelerations_fresh {
                    compute_accelerations(&mut self.system, &self.forces, &mut self.scratch);
                }
                velocity_verlet(&mut self.system, &self.forces, &mut self.scratch, dt);
            }
        }
        self.accelerations_fresh = true;
        self.steps += 1;

        trace!("step {} dt = {} t = {}", self.steps, dt, self.system.t);
        self.report_non_finite();

        self.observer.on_step_complete(&self.system);
        Ok(())
    }

    /// Same as [`advance`](Self::advance) with a measured duration
    pub fn advance_by(&mut self, elapsed: Duration) -> Result<(), SimError> {
        self.advance(elapsed.as_secs_f64())
    }

    // Coincident bodies poison the state with NaN/Inf. Not corrected, only reported once
    fn report_non_finite(&mut self) {
        if self.reported_non_finite {
            return;
        }
        if let Some(i) = self.system.bodies.iter().position(|b| !b.a.iter().all(|c| c.is_finite())) {
            warn!("body {} has a non-finite acceleration at t = {}, bodies may coincide", i, self.system.t);
            self.reported_non_finite = true;
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
