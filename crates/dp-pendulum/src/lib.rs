//! Double pendulum dynamics and trajectory integration.
//!
//! Two rigid massless rods with point masses, connected in series and free to
//! rotate under gravity. The one operation this crate exposes to consumers is
//! [`simulate`]: integrate the closed-form equations of motion from an initial
//! state over a fixed time grid into an immutable [`Trajectory`].
//!
//! Angles are measured in radians from the downward vertical and are never
//! wrapped into a canonical range: continuous unwrapped angles keep the
//! trajectory smooth.

pub mod dynamics;
pub mod energy;
pub mod kinematics;
pub mod params;
pub mod state;

// Re-exports for public API
pub use dynamics::{DoublePendulum, derivs};
pub use energy::{kinetic_energy, potential_energy, total_energy};
pub use kinematics::{JointPositions, joint_positions};
pub use params::PendulumParams;
pub use state::PendulumState;

use dp_sim::{SimOptions, SimRecord, SimResult, run_sim};

/// Identifies the integration scheme, for run caching.
pub const SOLVER_VERSION: &str = "rk4-0.1.0";

/// A full integration run: pendulum states on a uniform time grid.
pub type Trajectory = SimRecord<PendulumState>;

/// Integrate the equations of motion from `initial` across a fixed time grid.
///
/// The trajectory has `ceil(t_end / dt) + 1` samples, the first of which is
/// `initial`. Fails before any stepping for non-positive `dt` or `t_end`, or
/// for parameters with a non-positive length or mass; there are no partial
/// results.
pub fn simulate(
    initial: PendulumState,
    params: &PendulumParams,
    dt: f64,
    t_end: f64,
) -> SimResult<Trajectory> {
    let model = DoublePendulum::new(*params)?;
    let opts = SimOptions {
        dt,
        t_end,
        ..SimOptions::default()
    };
    run_sim(&model, initial, &opts)
}
