use std::time::Instant;

use log::info;

use crate::simulation::engine::Simulation;
use crate::simulation::params::{Integrator, Parameters};
use crate::simulation::states::{Body, NVec2};

/// Deterministic ring-ish layout of `n` unit-ish masses, no rand needed
pub fn bench_system(n: usize, integrator: Integrator) -> Simulation {
    let parameters = Parameters {
        g: 0.1,
        eps2: 1e-4,
        integrator,
    };
    let mut sim = Simulation::new(parameters);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (i_f * 0.37).sin() * 5.0 + i_f * 1e-3,
            (i_f * 0.13).cos() * 5.0,
        );
        // masses are fixed positive constants, construction cannot fail
        if let Ok(body) = Body::new(x, NVec2::zeros(), 1.0) {
            sim.add_body(body);
        }
    }
    sim
}

/// Time `advance` for growing N with both integrators
pub fn bench_advance() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600];
    let steps = 10;
    let dt = 1e-3;

    for n in ns {
        for integrator in [Integrator::SymplecticEuler, Integrator::VelocityVerlet] {
            let mut sim = bench_system(n, integrator);

            // Warm up
            if sim.advance(dt).is_err() {
                return;
            }

            let t0 = Instant::now();
            for _ in 0..steps {
                if sim.advance(dt).is_err() {
                    return;
                }
            }
            let per_step = t0.elapsed().as_secs_f64() / steps as f64;

            info!("N = {n:5}, {:?}: {:10.6} s/step", integrator, per_step);
        }
    }
}
