//! Time integrators for the N-body system
//!
//! Provides the semi-implicit (symplectic) Euler step and a single force
//! pass velocity-Verlet step, both driven by a `ForceSet` and a caller-owned
//! scratch buffer that only lives for the duration of one step

use super::states::{System, NVec2};
use super::forces::ForceSet;

/// Clear the scratch buffer, accumulate net forces for every body, and
/// store `a = F / m` on each body
pub fn compute_accelerations(sys: &mut System, forces: &ForceSet, scratch: &mut Vec<NVec2>) {
    let n = sys.bodies.len();

    // Fresh buffer every pass, nothing carries over from the previous step
    scratch.clear();
    scratch.resize(n, NVec2::zeros());

    forces.accumulate(&*sys, scratch);

    for (b, f) in sys.bodies.iter_mut().zip(scratch.iter()) {
        b.a = *f / b.m;
    }
}

/// Advance the system by `dt` using semi-implicit Euler
///
/// Order matters:
/// 1. v_n+1 = v_n + a_n dt (acceleration left over from the previous step)
/// 2. x_n+1 = x_n + v_n+1 dt
/// 3. forces and accelerations recomputed at x_n+1
pub fn symplectic_euler(sys: &mut System, forces: &ForceSet, scratch: &mut Vec<NVec2>, dt: f64) {
    if sys.bodies.is_empty() { // no bodies, only time moves
        sys.t += dt;
        return;
    }

    for b in sys.bodies.iter_mut() {
        b.v += b.a * dt;
        b.x += b.v * dt;
    }

    compute_accelerations(sys, forces, scratch);

    sys.t += dt;
}

/// Advance the system by `dt` using velocity-Verlet (kick, drift, kick)
///
/// Expects `b.a` to already hold a_n for the current positions, so only one
/// force evaluation is needed per step
pub fn velocity_verlet(sys: &mut System, forces: &ForceSet, scratch: &mut Vec<NVec2>, dt: f64) {
    if sys.bodies.is_empty() {
        sys.t += dt;
        return;
    }

    let half_dt = 0.5 * dt; // half step dt/2

    // Kick: v_n+1/2 = v_n + (1/2 * dt) * a_n
    // Drift: x_n+1 = x_n + dt v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.v += half_dt * b.a;
        b.x += dt * b.v;
    }

    // a_n+1 from x_n+1
    compute_accelerations(sys, forces, scratch);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for b in sys.bodies.iter_mut() {
        b.v += half_dt * b.a;
    }

    sys.t += dt;
}
