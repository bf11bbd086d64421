//! Core state types for the N-body simulation.
//!
//! Defines the 2D vector alias and the body/system structs:
//! - `NVec2` nalgebra vector used for positions, velocities, forces
//! - `Body` a point mass
//! - `System` the ordered list of bodies plus the current simulation time `t`

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Planar helpers on top of nalgebra's arithmetic
///
/// `unit` is deliberately untrapped: a zero-length vector gives NaN components,
/// so coincident bodies surface as non-finite forces instead of silent zeros
pub trait Planar {
    /// Directional vector pointing from `a` to `b` (`b - a`)
    fn from_to(a: &Self, b: &Self) -> Self;

    /// `self / magnitude()`
    fn unit(&self) -> Self;
}

impl Planar for NVec2 {
    fn from_to(a: &Self, b: &Self) -> Self {
        b - a
    }

    fn unit(&self) -> Self {
        *self / self.magnitude()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the last force pass
    pub m: f64, // mass
}

impl Body {
    /// Create a body at rest acceleration-wise
    /// Mass must be positive and finite
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass(m));
        }
        Ok(Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
        })
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // order drives pair iteration only
    pub t: f64, // time
}

impl System {
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }
}
