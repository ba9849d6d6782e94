//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub pendulum_id: String,
    pub timestamp: String,
    pub config: RunConfig,
    pub solver_version: String,
}

/// The fixed time grid a run was produced on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunConfig {
    pub dt_s: f64,
    pub t_end_s: f64,
    pub steps: usize,
}

/// One trajectory sample, as persisted to samples.jsonl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub time_s: f64,
    pub theta1_rad: f64,
    pub omega1_rad_s: f64,
    pub theta2_rad: f64,
    pub omega2_rad_s: f64,
}

/// RFC 3339 timestamp for run manifests.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
