//! Fixed-step sub-stepping integrators for the three-body system
//!
//! Both entry points split one tick `dt` into `substeps` equal pieces
//! `h = dt / substeps` and update the system in place:
//!
//! - [`advance`]: Euler sub-steps, position from the old velocity, then
//!   velocity from the start-of-step acceleration
//! - [`advance_verlet`]: kick-drift-kick velocity Verlet sub-steps
//!
//! Every sub-step ends with a finiteness check so a collision surfaces as
//! `SimError::NumericDegeneracy` instead of a stream of NaN positions.

use super::forces::AccelSet;
use super::states::{NVec3, System};
use crate::error::{Result, SimError};

/// Sub-steps per tick unless configured otherwise
pub const DEFAULT_SUBSTEPS: usize = 1000;

/// `h = dt / substeps`, or an error for zero sub-steps or a non-finite `dt`
pub(crate) fn check_step(dt: f64, substeps: usize) -> Result<f64> {
    if substeps == 0 {
        return Err(SimError::InvalidConfiguration(
            "substeps must be at least 1".to_string(),
        ));
    }
    if !dt.is_finite() {
        return Err(SimError::InvalidConfiguration(format!(
            "time step must be finite, got {dt}"
        )));
    }
    Ok(dt / substeps as f64)
}

fn check_finite(sys: &System) -> Result<()> {
    match sys.first_non_finite() {
        Some(body) => {
            log::warn!("body {body} became non-finite at t = {}", sys.t);
            Err(SimError::NumericDegeneracy { body, t: sys.t })
        }
        None => Ok(()),
    }
}

/// Advance `sys` by `dt` using `substeps` Euler sub-steps.
///
/// Per sub-step, accelerations for every body come from one snapshot of the
/// positions, then each body does `x += v h` followed by `v += a h`.
/// `sys.t` is advanced by the elapsed sub-steps.
pub fn advance(sys: &mut System, forces: &AccelSet, dt: f64, substeps: usize) -> Result<()> {
    let h = check_step(dt, substeps)?;
    if sys.is_empty() { // no bodies, return
        return Ok(());
    }
    let n = sys.len();

    let t0 = sys.t;
    let mut acc = vec![NVec3::zeros(); n];

    for step in 1..=substeps {
        // a_n from x_n, before any body moves
        forces.accumulate_accels(sys.t, &*sys, &mut acc);

        // x_n+1 = x_n + h v_n
        // v_n+1 = v_n + h a_n
        for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
            b.x += h * b.v;
            b.v += h * *a;
        }

        sys.t = t0 + step as f64 * h;
        check_finite(sys)?;
    }

    Ok(())
}

/// Advance `sys` by `dt` using `substeps` velocity-Verlet sub-steps.
///
/// The acceleration at the end of one sub-step is reused for the first kick
/// of the next, so each sub-step costs one force evaluation.
pub fn advance_verlet(sys: &mut System, forces: &AccelSet, dt: f64, substeps: usize) -> Result<()> {
    let h = check_step(dt, substeps)?;
    let half_h = 0.5 * h;
    if sys.is_empty() { // no bodies, return
        return Ok(());
    }
    let n = sys.len();

    let t0 = sys.t;

    // a_n from x_n at the start of the tick
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    for step in 1..=substeps {
        // Kick: v_n+1/2 = v_n + (h/2) a_n
        for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
            b.v += half_h * *a;
        }

        // Drift: x_n+1 = x_n + h v_n+1/2
        for b in sys.bodies.iter_mut() {
            b.x += h * b.v;
        }

        sys.t = t0 + step as f64 * h;

        // a_n+1 from x_n+1
        forces.accumulate_accels(sys.t, &*sys, &mut acc);

        // Second kick: v_n+1 = v_n+1/2 + (h/2) a_n+1
        for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
            b.v += half_h * *a;
        }

        check_finite(sys)?;
    }

    Ok(())
}
