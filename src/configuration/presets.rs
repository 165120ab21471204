//! Built-in three-body scenarios.
//!
//! Both presets use masses `[6, 1, 3]` and `G = 0.5`; they differ in the
//! starting positions and the initial speed scale.

use std::fmt;
use std::str::FromStr;

use crate::configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};
use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Slow, bound-looking dance (speed scale 0.08)
    Classic,
    /// Faster initial kick (speed scale 0.2)
    Fast,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Fast];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Fast => "fast",
        }
    }

    pub fn config(self) -> ScenarioConfig {
        let (speed_scale, positions) = match self {
            Preset::Classic => (
                0.08,
                [[1.0, 2.0, 0.0], [-2.0, 0.5, 1.0], [0.5, -1.5, -1.0]],
            ),
            Preset::Fast => (
                0.2,
                [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.5], [0.0, 1.5, -0.5]],
            ),
        };
        let masses = [6.0, 1.0, 3.0];

        ScenarioConfig {
            engine: EngineConfig::default(),
            parameters: ParametersConfig {
                G: 0.5,
                speed_scale,
                eps2: 0.0,
            },
            bodies: masses
                .iter()
                .zip(positions)
                .map(|(&m, x)| BodyConfig { x: x.to_vec(), m })
                .collect(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::InvalidConfiguration(format!("unknown preset '{s}'")))
    }
}
