//! Validated physical parameters.

use dp_core::numeric::{ensure_finite, ensure_positive};
use dp_core::units::{Accel, Length, Mass};
use dp_sim::SimResult;

/// Physical constants of a double pendulum, fixed for the life of a run.
///
/// Stored as raw SI values for the integration loop; the constructor takes
/// typed quantities so unit mistakes stay at the API boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumParams {
    /// Gravitational acceleration in m/s²
    pub g_mps2: f64,
    /// Length of rod 1 in m
    pub l1_m: f64,
    /// Length of rod 2 in m
    pub l2_m: f64,
    /// Mass of bob 1 in kg
    pub m1_kg: f64,
    /// Mass of bob 2 in kg
    pub m2_kg: f64,
}

impl PendulumParams {
    /// Create a parameter set, rejecting non-positive lengths or masses.
    pub fn new(g: Accel, l1: Length, l2: Length, m1: Mass, m2: Mass) -> SimResult<Self> {
        let params = Self {
            g_mps2: g.value,
            l1_m: l1.value,
            l2_m: l2.value,
            m1_kg: m1.value,
            m2_kg: m2.value,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reference configuration: g = 9.8 m/s², unit rods, unit masses.
    pub fn reference() -> Self {
        Self {
            g_mps2: 9.8,
            l1_m: 1.0,
            l2_m: 1.0,
            m1_kg: 1.0,
            m2_kg: 1.0,
        }
    }

    /// Check the constraints the dynamics rely on.
    ///
    /// Zero-length rods or zero masses would make the equation-of-motion
    /// denominators vanish, so they are rejected here rather than mid-run.
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.g_mps2, "g must be finite")?;
        ensure_positive(self.l1_m, "l1 must be positive")?;
        ensure_positive(self.l2_m, "l2 must be positive")?;
        ensure_positive(self.m1_kg, "m1 must be positive")?;
        ensure_positive(self.m2_kg, "m2 must be positive")?;
        Ok(())
    }
}
