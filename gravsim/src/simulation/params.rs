//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g`
//! - optional softening `eps2` (0 keeps the exact inverse-square law)
//! - which integrator advances the system

/// Newton's gravitational constant in SI units
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Step rule used by [`Simulation::advance`](crate::Simulation::advance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    /// velocity from the previous acceleration, then position from the new velocity
    #[default]
    SymplecticEuler,
    /// kick / drift / kick with a single force pass per step
    VelocityVerlet,
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening, squared length
    pub integrator: Integrator,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            eps2: 0.0,
            integrator: Integrator::default(),
        }
    }
}
