//! Force / acceleration contributors for the three-body engine
//!
//! Defines the acceleration trait, the `AccelSet` that sums contributors,
//! and direct-sum Newtonian gravity

use crate::simulation::states::{NVec3, System};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - every term reads the same positions, so no body sees a partially
    ///   advanced neighbour
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity, direct O(N^2) pair sum
///
/// With `eps2 = 0` this is the plain inverse-square law and two coincident
/// bodies produce NaN; the integrator reports that as a degeneracy.
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl NewtonianGravity {
    /// Gravitational potential energy, -Σ_{i<j} G m_i m_j / |r_ij|
    pub fn potential_energy(&self, sys: &System) -> f64 {
        let n = sys.bodies.len();
        let mut u = 0.0;

        for i in 0..n {
            for j in (i + 1)..n {
                let (bi, bj) = (&sys.bodies[i], &sys.bodies[j]);
                let r_soft = ((bj.x - bi.x).norm_squared() + self.eps2).sqrt();
                u -= self.G * bi.m * bj.m / r_soft;
            }
        }

        u
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Visit each unordered pair (i, j) with i < j once
        for i in 0..n {
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;

                // |r|^2 + softening
                let d2 = r.norm_squared() + self.eps2;

                // G / |r|^3
                let inv_r = d2.sqrt().recip();
                let coef = self.G * inv_r * inv_r * inv_r;

                // a_i +=  G m_j r / |r|^3
                // a_j += -G m_i r / |r|^3
                out[i] += coef * bj.m * r;
                out[j] -= coef * bi.m * r;
            }
        }
    }
}
