pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, System, Snapshot, NVec3};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::initial::{initialize, raw_velocities, remove_drift, DEGENERACY_EPS};
pub use simulation::integrator::{advance, advance_verlet, DEFAULT_SUBSTEPS};
pub use simulation::scenario::{Scenario, Ticks};

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};
pub use configuration::presets::Preset;

pub use benchmark::benchmark::{bench_advance, bench_convergence_curve, max_position_error};
