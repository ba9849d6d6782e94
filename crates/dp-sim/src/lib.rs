//! Fixed-step simulation framework for dpend.
//!
//! Provides:
//! - DynamicModel trait for pluggable ODE right-hand sides
//! - Classical fixed-step RK4 integrator
//! - Simulation runner producing a full, uniformly-spaced state record

pub mod error;
pub mod integrator;
pub mod model;
pub mod sim;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{Integrator, RK4};
pub use model::DynamicModel;
pub use sim::{SimOptions, SimRecord, run_sim};
