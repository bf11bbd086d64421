//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator and stepping policy
//! - [`ParametersConfig`] – physical constants and softening
//! - [`CameraConfig`]     – initial viewport center and zoom
//! - [`ViewportConfig`]   – screen size in pixels
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies` may be left out and falls back to defaults.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "symplectic_euler"   # or "verlet"
//!   policy: "wall_clock"             # or "fixed"
//!   dt: 0.01                         # used by the fixed policy
//!   interval_ms: 16                  # driver tick
//!
//! parameters:
//!   G: 6.674e-11                     # gravitational constant
//!   eps2: 0.0                        # softening, 0 keeps the exact law
//!
//! camera:
//!   center: [ 0.0, 0.0 ]
//!   zoom: 5.0                        # pixels per simulation unit
//!
//! viewport:
//!   width: 800.0
//!   height: 600.0
//!
//! bodies:
//!   - x: [  10.0, 0.0 ]
//!     v: [   0.0, 10.0 ]
//!     m: 59934072520228.0
//!   - x: [ -10.0, 0.0 ]
//!     v: [   0.0, -10.0 ]
//!     m: 59934072520228.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::GRAVITATIONAL_CONSTANT;

/// Which integrator the engine uses
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "symplectic_euler")] // semi-implicit Euler, velocity first then position
    #[default]
    SymplecticEuler,

    #[serde(rename = "verlet")] // velocity Verlet, kick drift kick
    Verlet,
}

/// How the driver picks each step's duration
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum PolicyConfig {
    #[serde(rename = "wall_clock")] // measured elapsed time per tick
    #[default]
    WallClock,

    #[serde(rename = "fixed")] // constant `dt` per tick
    Fixed,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    pub policy: PolicyConfig,
    pub dt: f64, // step for the fixed policy
    pub interval_ms: u64, // driver tick
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            policy: PolicyConfig::default(),
            dt: 0.01,
            interval_ms: 16,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening - bounds forces at very small separations
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            eps2: 0.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub center: [f64; 2],
    pub zoom: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            zoom: 5.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // Initial position in simulation units
    pub v: [f64; 2], // Initial velocity in simulation units per second
    pub m: f64,      // Mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, SimError> {
        serde_yaml::from_str(text).map_err(|e| SimError::InvalidConfig(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SimError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }
}
