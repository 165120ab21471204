//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator scheme, sub-steps per tick, tick length
//! - [`ParametersConfig`] – physical constants
//! - [`BodyConfig`]       – mass and starting position for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Velocities are not part of the file: the initial-condition solver derives
//! them from masses and positions.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "verlet"
//!   substeps: 1000          # optional, default 1000
//!   dt: 0.0333333333        # tick length
//!
//! parameters:
//!   G: 0.5                  # gravitational constant
//!   speed_scale: 0.08       # initial speed per unit mass
//!   eps2: 0.0               # optional softening, default 0
//!
//! bodies:
//!   - x: [ 1.0, 2.0, 0.0 ]
//!     m: 6.0
//!   - x: [ -2.0, 0.5, 1.0 ]
//!     m: 1.0
//!   - x: [ 0.5, -1.5, -1.0 ]
//!     m: 3.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::DEFAULT_SUBSTEPS;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec3;

/// Which integrator the engine uses
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "euler")] // x from old v, then v from a(x_old). One force evaluation per sub-step
    Euler,

    #[serde(rename = "verlet")] // Kick-drift-kick velocity Verlet. Symplectic, better long-run energy behaviour
    Verlet,
}

fn default_substeps() -> usize {
    DEFAULT_SUBSTEPS
}

fn default_dt() -> f64 {
    Engine::DEFAULT_DT
}

/// Engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig,
    #[serde(default = "default_substeps")]
    pub substeps: usize, // sub-steps per tick, trades accuracy for cost
    #[serde(default = "default_dt")]
    pub dt: f64, // tick length in simulation time
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            substeps: default_substeps(),
            dt: default_dt(),
        }
    }
}

/// Physical constants for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,           // gravitational constant
    pub speed_scale: f64, // k in v_i = k * m_i * n_i
    #[serde(default)]
    pub eps2: f64,        // softening, 0 = plain Newtonian gravity
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position, exactly three components
    pub m: f64,      // mass, strictly positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    /// Body positions as vectors; fails on anything but three components
    pub fn positions(&self) -> Result<Vec<NVec3>> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| match b.x.as_slice() {
                &[x, y, z] => Ok(NVec3::new(x, y, z)),
                other => Err(SimError::InvalidConfiguration(format!(
                    "body {i} position has {} components, expected 3",
                    other.len()
                ))),
            })
            .collect()
    }

    pub fn engine(&self) -> Engine {
        Engine {
            integrator: self.engine.integrator,
            substeps: self.engine.substeps,
            dt: self.engine.dt,
        }
    }

    pub fn parameters(&self) -> Parameters {
        Parameters {
            G: self.parameters.G,
            speed_scale: self.parameters.speed_scale,
            eps2: self.parameters.eps2,
        }
    }
}
