//! Initial-condition solver
//!
//! Turns masses and starting positions into a ready-to-integrate `System`:
//!
//! 1. every body gets a velocity perpendicular to two of its separation
//!    vectors, `v_i = k * m_i * normalize(d_a × d_b)`
//! 2. the whole set is shifted so the center of mass sits at the origin and
//!    the mean momentum is zero
//!
//! Step 2 has to see every raw velocity, so it runs as a separate pass.

use crate::error::{Result, SimError};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Relative tolerance: a separation shorter than this fraction of the
/// farthest one counts as coincident, and a pair whose sine of angle is below
/// it counts as parallel
pub const DEGENERACY_EPS: f64 = 1e-12;

/// Build an initialized system from per-body masses and positions
pub fn initialize(masses: &[f64], positions: &[NVec3], params: &Parameters) -> Result<System> {
    let velocities = raw_velocities(masses, positions, params)?;

    let bodies = masses
        .iter()
        .zip(positions)
        .zip(velocities)
        .map(|((&m, &x), v)| Body::new(x, v, m))
        .collect();

    let mut sys = System::new(bodies);
    remove_drift(&mut sys);

    log::debug!(
        "initialized {} bodies, total mass {:.6}",
        sys.len(),
        sys.total_mass()
    );

    Ok(sys)
}

/// Velocities before drift removal, `k * m_i * normalize(d_a × d_b)`
pub fn raw_velocities(masses: &[f64], positions: &[NVec3], params: &Parameters) -> Result<Vec<NVec3>> {
    validate(masses, positions)?;

    masses
        .iter()
        .enumerate()
        .map(|(i, &m)| -> Result<NVec3> { Ok(params.speed_scale * m * velocity_direction(i, positions)?) })
        .collect()
}

fn validate(masses: &[f64], positions: &[NVec3]) -> Result<()> {
    if masses.len() != positions.len() {
        return Err(SimError::InvalidConfiguration(format!(
            "{} masses but {} positions",
            masses.len(),
            positions.len()
        )));
    }
    if masses.len() < 2 {
        return Err(SimError::InvalidConfiguration(format!(
            "need at least 2 bodies, got {}",
            masses.len()
        )));
    }
    if let Some(i) = masses.iter().position(|m| !(m.is_finite() && *m > 0.0)) {
        return Err(SimError::InvalidConfiguration(format!(
            "body {i} has non-positive mass {}",
            masses[i]
        )));
    }
    if let Some(i) = positions.iter().position(|x| !x.iter().all(|c| c.is_finite())) {
        return Err(SimError::InvalidConfiguration(format!(
            "body {i} has a non-finite position"
        )));
    }
    Ok(())
}

/// Unit vector perpendicular to the first usable pair of separations
/// `x_i - x_j` (index order), skipping coincident neighbours and parallel
/// pairs. Both tolerances are relative, so the result does not depend on the
/// length unit of the layout.
fn velocity_direction(i: usize, positions: &[NVec3]) -> Result<NVec3> {
    let overflow = || {
        SimError::InvalidConfiguration(format!(
            "separation vectors for body {i} overflow f64; rescale the positions"
        ))
    };

    let xi = positions[i];
    let diffs: Vec<(NVec3, f64)> = positions
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, xj)| {
            let d = xi - xj;
            (d, d.norm())
        })
        .collect();

    if diffs.iter().any(|(_, n)| !n.is_finite()) {
        return Err(overflow());
    }

    // coincident relative to the farthest neighbour
    let extent = diffs.iter().map(|&(_, n)| n).fold(0.0, f64::max);
    let usable: Vec<(NVec3, f64)> = diffs
        .into_iter()
        .filter(|&(_, n)| n > DEGENERACY_EPS * extent)
        .collect();

    for (a, (da, na)) in usable.iter().enumerate() {
        for (db, nb) in &usable[a + 1..] {
            let c = da.cross(db);
            let norm = c.norm();
            if !norm.is_finite() {
                return Err(overflow());
            }
            // |da × db| = |da| |db| sin(angle)
            if norm > DEGENERACY_EPS * na * nb {
                return Ok(c / norm);
            }
        }
    }

    Err(SimError::InvalidConfiguration(format!(
        "body {i} has no pair of non-degenerate separation vectors ({} usable)",
        usable.len()
    )))
}

/// Shift positions by the center of mass and velocities by the mean momentum
pub fn remove_drift(sys: &mut System) {
    let total = sys.total_mass();
    if total <= 0.0 {
        return;
    }
    let com = sys.center_of_mass();
    let mean_momentum = sys.momentum() / total;

    for b in sys.bodies.iter_mut() {
        b.x -= com;
        b.v -= mean_momentum;
    }
}
