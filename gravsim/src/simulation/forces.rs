//! Force contributors for the n-body engine
//!
//! Defines the pairwise force trait, direct Newtonian gravity, and the
//! force set that turns pair forces into a per-body net force buffer

use crate::simulation::states::{Body, System, NVec2, Planar};

/// Force exerted on `a` by `b` under Newtonian gravitation
///
/// `G * ma * mb / r^2` along the unit vector from `a` to `b`.
/// Coincident bodies give `r = 0` and a non-finite result; this is not
/// special-cased here
pub fn gravitational_force(a: &Body, b: &Body, g: f64) -> NVec2 {
    let r = NVec2::from_to(&a.x, &b.x);
    let r2 = r.dot(&r);
    r.unit() * (g * a.m * b.m / r2)
}

/// Trait for pairwise force laws
/// Implementations return the force on `a` by `b`; the force on `b` by `a`
/// is taken to be its exact negation
pub trait PairForce {
    fn force(&self, a: &Body, b: &Body) -> NVec2;
}

/// Newtonian gravity with optional Plummer softening
/// With `eps2 == 0` this is exactly [`gravitational_force`]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl PairForce for NewtonianGravity {
    fn force(&self, a: &Body, b: &Body) -> NVec2 {
        if self.eps2 == 0.0 {
            return gravitational_force(a, b, self.g);
        }

        // r is the displacement vector from a to b
        let r = NVec2::from_to(&a.x, &b.x);
        let r2 = r.dot(&r);

        // Coincident bodies have no direction to pull along
        if r2 == 0.0 {
            return NVec2::zeros();
        }

        // Softened magnitude G ma mb / (|r|^2 + eps2)
        r.unit() * (self.g * a.m * b.m / (r2 + self.eps2))
    }
}

/// Collection of pairwise force terms (gravity, later others)
/// Each term implements [`PairForce`] and their contributions are summed
/// into a single net force per body
pub struct ForceSet {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn push<T>(&mut self, term: T)
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute net forces for all bodies in `sys`
    /// - `out[i]` will be set to the sum of every term over every partner of body i
    pub fn accumulate(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }

        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                for term in &self.terms {
                    // One evaluation per pair, applied equal and opposite
                    let f = term.force(bi, bj);
                    out[i] += f;
                    out[j] -= f;
                }
            }
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}
