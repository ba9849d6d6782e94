//! Mechanical energy of a pendulum state.
//!
//! Used by the conservation tests and the run summary; the integrator itself
//! never corrects energy (fixed-step RK4 only bounds the drift).

use crate::params::PendulumParams;
use crate::state::PendulumState;

/// Kinetic energy of the two point masses, in joules.
pub fn kinetic_energy(state: &PendulumState, p: &PendulumParams) -> f64 {
    let l1 = p.l1_m;
    let l2 = p.l2_m;
    let m1 = p.m1_kg;
    let m2 = p.m2_kg;
    let w1 = state.omega1_rad_s;
    let w2 = state.omega2_rad_s;
    let delta = state.theta1_rad - state.theta2_rad;

    0.5 * (m1 + m2) * l1 * l1 * w1 * w1
        + 0.5 * m2 * l2 * l2 * w2 * w2
        + m2 * l1 * l2 * w1 * w2 * delta.cos()
}

/// Gravitational potential energy, in joules, zero at the pivot height.
pub fn potential_energy(state: &PendulumState, p: &PendulumParams) -> f64 {
    let y1 = -p.l1_m * state.theta1_rad.cos();
    let y2 = y1 - p.l2_m * state.theta2_rad.cos();
    (p.m1_kg * y1 + p.m2_kg * y2) * p.g_mps2
}

/// Total mechanical energy (kinetic + potential).
pub fn total_energy(state: &PendulumState, p: &PendulumParams) -> f64 {
    kinetic_energy(state, p) + potential_energy(state, p)
}
