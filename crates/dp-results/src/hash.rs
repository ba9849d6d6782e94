//! Content-based hashing for run IDs.
//!
//! The integrator is deterministic, so a run is fully identified by the
//! pendulum definition (parameters, initial conditions, time grid) and the
//! solver version. Identical inputs reuse the cached trajectory.

use dp_scenario::PendulumDef;
use sha2::{Digest, Sha256};

pub fn compute_run_id(pendulum: &PendulumDef, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let pendulum_json = serde_json::to_string(pendulum).unwrap_or_default();
    hasher.update(pendulum_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
