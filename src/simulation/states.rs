//! Core state types for the three-body simulation.
//!
//! - `Body`     a point mass with position and velocity
//! - `System`   the ordered body list plus the current simulation time `t`
//! - `Snapshot` a read-only copy of one tick, handed to renderers
//!
//! Bodies carry physics only. Anything visual (color, radius, trail) belongs
//! to the renderer and is associated by body index.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, fixed for the run
}

impl Body {
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self { x, v, m }
    }

    /// m * v
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    /// 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // body order is stable for the whole run
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Mass-weighted mean position. Zero for an empty or massless system.
    pub fn center_of_mass(&self) -> NVec3 {
        let total = self.total_mass();
        if total <= 0.0 {
            return NVec3::zeros();
        }
        self.bodies.iter().fold(NVec3::zeros(), |acc, b| acc + b.m * b.x) / total
    }

    /// Total linear momentum Σ m v.
    pub fn momentum(&self) -> NVec3 {
        self.bodies.iter().fold(NVec3::zeros(), |acc, b| acc + b.momentum())
    }

    /// Total angular momentum about the origin, Σ m (x × v).
    pub fn angular_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |acc, b| acc + b.m * b.x.cross(&b.v))
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn positions(&self) -> Vec<NVec3> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    pub fn velocities(&self) -> Vec<NVec3> {
        self.bodies.iter().map(|b| b.v).collect()
    }

    /// Index of the first body whose position or velocity is not finite.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.bodies.iter().position(|b| {
            !(b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite()))
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            t: self.t,
            positions: self.positions(),
            velocities: self.velocities(),
        }
    }
}

/// State of every body after one tick, indexed like `System::bodies`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub t: f64,
    pub positions: Vec<NVec3>,
    pub velocities: Vec<NVec3>,
}
