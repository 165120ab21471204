use std::time::Instant;

use crate::configuration::presets::Preset;
use crate::error::Result;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::{advance, advance_verlet};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;

type Scheme = fn(&mut System, &AccelSet, f64, usize) -> Result<()>;

/// Wall time per `advance` call on the classic preset for a range of
/// sub-step counts, both schemes
pub fn bench_advance() -> Result<()> {
    let substeps = [100, 500, 1000, 2000, 5000, 10000];
    let ticks = 30; // one second of animation at 30 fps

    for n in substeps {
        let euler = time_ticks(advance, n, ticks)?;
        let verlet = time_ticks(advance_verlet, n, ticks)?;
        println!(
            "substeps = {:5}, euler tick = {:8.6} s,   verlet tick = {:8.6} s",
            n, euler, verlet
        );
    }

    Ok(())
}

fn time_ticks(scheme: Scheme, substeps: usize, ticks: usize) -> Result<f64> {
    let scenario = Scenario::from_preset(Preset::Classic)?;
    let mut sys = scenario.system.clone();
    let dt = scenario.engine.dt;

    // Warm-up
    scheme(&mut sys, &scenario.forces, dt, substeps)?;

    let t0 = Instant::now();
    for _ in 0..ticks {
        scheme(&mut sys, &scenario.forces, dt, substeps)?;
    }
    Ok(t0.elapsed().as_secs_f64() / ticks as f64)
}

/// Largest position difference between two runs of the same system
pub fn max_position_error(a: &System, b: &System) -> f64 {
    a.bodies
        .iter()
        .zip(b.bodies.iter())
        .map(|(p, q)| (p.x - q.x).norm())
        .fold(0.0, f64::max)
}

/// Max position error after `dt` against a 100k sub-step reference
/// Paste output directly into a spreadsheet to graph
pub fn bench_convergence_curve() -> Result<()> {
    let scenario = Scenario::from_preset(Preset::Classic)?;
    let dt = 0.5;

    let mut reference = scenario.system.clone();
    advance_verlet(&mut reference, &scenario.forces, dt, 100_000)?;

    println!("substeps,euler_err,verlet_err");

    for substeps in [10, 20, 50, 100, 200, 500, 1000, 2000, 5000] {
        let mut euler = scenario.system.clone();
        advance(&mut euler, &scenario.forces, dt, substeps)?;

        let mut verlet = scenario.system.clone();
        advance_verlet(&mut verlet, &scenario.forces, dt, substeps)?;

        println!(
            "{},{:.3e},{:.3e}",
            substeps,
            max_position_error(&euler, &reference),
            max_position_error(&verlet, &reference)
        );
    }

    Ok(())
}
