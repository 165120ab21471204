//! High-level runtime engine settings
//!
//! Selects the integrator scheme, the number of sub-steps per tick, and the
//! tick length used when driving a `Scenario`

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::DEFAULT_SUBSTEPS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or verlet
    pub substeps: usize, // sub-steps per tick
    pub dt: f64, // tick length
}

impl Engine {
    pub const DEFAULT_DT: f64 = 1.0 / 30.0;
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::Euler,
            substeps: DEFAULT_SUBSTEPS,
            dt: Self::DEFAULT_DT,
        }
    }
}
