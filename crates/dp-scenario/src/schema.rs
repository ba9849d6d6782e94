//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A scenario file: one or more pendulum setups to simulate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub pendulums: Vec<PendulumDef>,
}

impl Scenario {
    pub fn pendulum(&self, id: &str) -> Option<&PendulumDef> {
        self.pendulums.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendulumDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub params: ParamsDef,
    pub initial: InitialDef,
    pub grid: TimeGridDef,
}

/// Physical parameters in SI units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamsDef {
    pub g_mps2: f64,
    pub l1_m: f64,
    pub l2_m: f64,
    pub m1_kg: f64,
    pub m2_kg: f64,
}

impl Default for ParamsDef {
    /// The reference configuration: g = 9.8 m/s², unit rods, unit masses.
    fn default() -> Self {
        Self {
            g_mps2: 9.8,
            l1_m: 1.0,
            l2_m: 1.0,
            m1_kg: 1.0,
            m2_kg: 1.0,
        }
    }
}

/// Initial conditions, authored in degrees and degrees per second.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InitialDef {
    pub theta1_deg: f64,
    #[serde(default)]
    pub omega1_deg_s: f64,
    pub theta2_deg: f64,
    #[serde(default)]
    pub omega2_deg_s: f64,
}

/// Fixed integration grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeGridDef {
    pub dt_s: f64,
    pub t_end_s: f64,
}
