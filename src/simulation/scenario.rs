//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) or a built-in `Preset` and
//! produces a runtime `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System`, already through the initial-condition solver)
//! - active force set (`AccelSet`)
//!
//! A renderer drives the scenario one tick at a time, either with `step`
//! or by pulling snapshots out of `ticks`.

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::configuration::presets::Preset;
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::initial::initialize;
use crate::simulation::integrator::{advance, advance_verlet, check_step};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Snapshot, System};

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let engine = cfg.engine();
        let parameters = cfg.parameters();

        // Surface bad engine settings before any tick runs
        check_step(engine.dt, engine.substeps)?;

        // Velocities and drift removal come from the solver, not the file
        let system = initialize(&cfg.masses(), &cfg.positions()?, &parameters)?;

        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        log::info!(
            "scenario: {} bodies, {:?} integrator, {} substeps, dt = {}",
            system.len(),
            engine.integrator,
            engine.substeps,
            engine.dt
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    pub fn from_preset(preset: Preset) -> Result<Self> {
        log::info!("using preset '{preset}'");
        Self::build_scenario(preset.config())
    }

    /// Advance the system by one tick using the configured scheme
    pub fn step(&mut self) -> Result<()> {
        let Engine { integrator, substeps, dt } = self.engine;
        match integrator {
            IntegratorConfig::Euler => advance(&mut self.system, &self.forces, dt, substeps),
            IntegratorConfig::Verlet => advance_verlet(&mut self.system, &self.forces, dt, substeps),
        }
    }

    /// Unbounded stream of per-tick snapshots
    pub fn ticks(&mut self) -> Ticks<'_> {
        Ticks {
            scenario: self,
            tick: 0,
            halted: false,
        }
    }

    /// Kinetic plus gravitational potential energy, using the current
    /// `parameters`
    pub fn total_energy(&self) -> f64 {
        let gravity = NewtonianGravity {
            G: self.parameters.G,
            eps2: self.parameters.eps2,
        };
        self.system.kinetic_energy() + gravity.potential_energy(&self.system)
    }
}

/// Iterator returned by [`Scenario::ticks`]
///
/// Each `next` advances one tick. After an error the iterator is exhausted.
pub struct Ticks<'a> {
    scenario: &'a mut Scenario,
    tick: u64,
    halted: bool,
}

impl Iterator for Ticks<'_> {
    type Item = Result<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.scenario.step() {
            Ok(()) => {
                self.tick += 1;
                log::debug!("tick {} at t = {:.6}", self.tick, self.scenario.system.t);
                Some(Ok(self.scenario.system.snapshot()))
            }
            Err(e) => {
                self.halted = true;
                Some(Err(e))
            }
        }
    }
}
