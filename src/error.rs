//! Error types for trisim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Inputs that can never produce a valid simulation (bad masses,
    /// coincident or collinear bodies, zero sub-steps, malformed config).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A body's state went non-finite during integration, usually because
    /// two bodies collided.
    #[error("Numeric degeneracy: body {body} became non-finite at t = {t}")]
    NumericDegeneracy { body: usize, t: f64 },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
