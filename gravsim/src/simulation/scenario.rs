//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - the `Simulation` with its bodies at t = 0
//! - a `ViewportMapper` holding the initial camera
//! - the `StepPolicy` the driver should use

use std::time::Duration;

use log::debug;

use crate::configuration::config::{BodyConfig, IntegratorConfig, PolicyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::driver::StepPolicy;
use crate::simulation::engine::Simulation;
use crate::simulation::params::{Integrator, Parameters};
use crate::simulation::states::{Body, NVec2};
use crate::visualization::camera::Camera;
use crate::visualization::viewport::{Bounds, ViewportMapper};

pub struct Scenario {
    pub simulation: Simulation,
    pub viewport: ViewportMapper,
    pub policy: StepPolicy,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.g.is_finite() && p_cfg.g >= 0.0) {
            return Err(SimError::InvalidConfig(format!("G must be finite and non-negative, got {}", p_cfg.g)));
        }
        if !(p_cfg.eps2.is_finite() && p_cfg.eps2 >= 0.0) {
            return Err(SimError::InvalidConfig(format!("eps2 must be finite and non-negative, got {}", p_cfg.eps2)));
        }
        let parameters = Parameters {
            g: p_cfg.g,
            eps2: p_cfg.eps2,
            integrator: match cfg.engine.integrator {
                IntegratorConfig::SymplecticEuler => Integrator::SymplecticEuler,
                IntegratorConfig::Verlet => Integrator::VelocityVerlet,
            },
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, rejecting bad masses
        let mut simulation = Simulation::new(parameters);
        for bc in cfg.bodies.iter() {
            simulation.add_body(body_from_config(bc)?);
        }

        let interval = Duration::from_millis(cfg.engine.interval_ms.max(1));
        let policy = match cfg.engine.policy {
            PolicyConfig::WallClock => StepPolicy::WallClock { interval },
            PolicyConfig::Fixed => {
                if !(cfg.engine.dt.is_finite() && cfg.engine.dt > 0.0) {
                    return Err(SimError::InvalidTimeStep(cfg.engine.dt));
                }
                StepPolicy::Fixed { dt: cfg.engine.dt, interval }
            }
        };

        let camera = Camera::new(NVec2::new(cfg.camera.center[0], cfg.camera.center[1]), cfg.camera.zoom)?;
        let bounds = Bounds::from_size(cfg.viewport.width, cfg.viewport.height)?;
        let viewport = ViewportMapper::new(camera, bounds);

        debug!("built scenario with {} bodies, {:?}", simulation.len(), policy);

        Ok(Self {
            simulation,
            viewport,
            policy,
        })
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body, SimError> {
    Body::new(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.m,
    )
}
