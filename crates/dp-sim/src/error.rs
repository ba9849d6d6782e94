//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered when setting up or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<dp_core::DpError> for SimError {
    fn from(e: dp_core::DpError) -> Self {
        match e {
            dp_core::DpError::InvalidArg { what } => SimError::InvalidArg { what },
            dp_core::DpError::NonFinite { what, .. } => SimError::NonPhysical { what },
            dp_core::DpError::Invariant { what } => SimError::NonPhysical { what },
        }
    }
}
