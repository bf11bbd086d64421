pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, System, NVec2, Planar};
pub use simulation::params::{Parameters, Integrator, GRAVITATIONAL_CONSTANT};
pub use simulation::forces::{gravitational_force, PairForce, NewtonianGravity, ForceSet};
pub use simulation::integrator::{symplectic_euler, velocity_verlet};
pub use simulation::observer::{StepObserver, NoOpStepObserver, ChannelObserver, Snapshot};
pub use simulation::engine::Simulation;
pub use simulation::driver::{Driver, StepPolicy, SharedSimulation, shared};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, CameraConfig, ViewportConfig, BodyConfig};

pub use visualization::camera::{Camera, DEFAULT_ZOOM_FACTOR, MIN_ZOOM, MAX_ZOOM};
pub use visualization::grid::{grid_spacing_for_zoom, GridLine, GridLines, MIN_GRID_PIXELS};
pub use visualization::viewport::{Bounds, ViewportMapper, clip};

pub use benchmark::benchmark::bench_advance;
