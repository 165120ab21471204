pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod initial;
pub mod integrator;
pub mod scenario;
