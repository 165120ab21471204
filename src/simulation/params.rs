//! Physical parameters for the simulation
//!
//! `Parameters` holds the constants that used to be script globals:
//! - gravitational constant `G` (dimensionless, tuned for visual scale),
//! - `speed_scale` used by the initial-condition solver (`k` in v = k m n̂),
//! - optional softening `eps2` (0 gives the plain Newtonian law)

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub speed_scale: f64, // initial speed per unit mass
    pub eps2: f64, // softening
}

impl Parameters {
    pub const DEFAULT_G: f64 = 0.5;
    pub const DEFAULT_SPEED_SCALE: f64 = 0.08;
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: Self::DEFAULT_G,
            speed_scale: Self::DEFAULT_SPEED_SCALE,
            eps2: 0.0,
        }
    }
}
