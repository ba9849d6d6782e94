//! Planar joint positions for rendering and export.
//!
//! The integration core never calls this; it exists for consumers that want
//! Cartesian coordinates (CSV export, plotting front-ends, the rod-length
//! tests).

use crate::params::PendulumParams;
use crate::state::PendulumState;

/// Cartesian positions of the two bobs. Pivot at the origin, y points up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointPositions {
    pub x1_m: f64,
    pub y1_m: f64,
    pub x2_m: f64,
    pub y2_m: f64,
}

/// Project a state onto the plane.
pub fn joint_positions(state: &PendulumState, p: &PendulumParams) -> JointPositions {
    let x1 = p.l1_m * state.theta1_rad.sin();
    let y1 = -p.l1_m * state.theta1_rad.cos();
    let x2 = x1 + p.l2_m * state.theta2_rad.sin();
    let y2 = y1 - p.l2_m * state.theta2_rad.cos();
    JointPositions {
        x1_m: x1,
        y1_m: y1,
        x2_m: x2,
        y2_m: y2,
    }
}
