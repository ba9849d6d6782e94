//! Closed-form Lagrangian equations of motion.

use crate::params::PendulumParams;
use crate::state::PendulumState;
use dp_sim::{DynamicModel, SimResult};

/// Time derivative of a state under the double-pendulum equations of motion.
///
/// Pure and total over all real angles and velocities: the integrator calls
/// this with intermediate mid-step estimates, so nothing here assumes a
/// physical or wrapped state. The denominators cannot vanish for validated
/// parameters.
pub fn derivs(state: &PendulumState, p: &PendulumParams) -> PendulumState {
    let g = p.g_mps2;
    let l1 = p.l1_m;
    let l2 = p.l2_m;
    let m1 = p.m1_kg;
    let m2 = p.m2_kg;

    let theta1 = state.theta1_rad;
    let omega1 = state.omega1_rad_s;
    let theta2 = state.theta2_rad;
    let omega2 = state.omega2_rad_s;

    let delta = theta2 - theta1;
    let (sin_d, cos_d) = delta.sin_cos();

    let den1 = (m1 + m2) * l1 - m2 * l1 * cos_d * cos_d;
    let domega1 = (m2 * l1 * omega1 * omega1 * sin_d * cos_d
        + m2 * g * theta2.sin() * cos_d
        + m2 * l2 * omega2 * omega2 * sin_d
        - (m1 + m2) * g * theta1.sin())
        / den1;

    let den2 = (l2 / l1) * den1;
    let domega2 = (-m2 * l2 * omega2 * omega2 * sin_d * cos_d
        + (m1 + m2) * g * theta1.sin() * cos_d
        - (m1 + m2) * l1 * omega1 * omega1 * sin_d
        - (m1 + m2) * g * theta2.sin())
        / den2;

    PendulumState {
        theta1_rad: omega1,
        omega1_rad_s: domega1,
        theta2_rad: omega2,
        omega2_rad_s: domega2,
    }
}

/// The double pendulum as a pluggable dynamic model.
#[derive(Clone, Debug)]
pub struct DoublePendulum {
    params: PendulumParams,
}

impl DoublePendulum {
    /// Wrap a parameter set, re-checking its constraints.
    pub fn new(params: PendulumParams) -> SimResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }
}

impl DynamicModel for DoublePendulum {
    type State = PendulumState;

    fn rhs(&self, _t: f64, x: &PendulumState) -> SimResult<PendulumState> {
        // Autonomous system: t does not appear in the equations.
        Ok(derivs(x, &self.params))
    }

    fn add(&self, a: &PendulumState, b: &PendulumState) -> PendulumState {
        PendulumState {
            theta1_rad: a.theta1_rad + b.theta1_rad,
            omega1_rad_s: a.omega1_rad_s + b.omega1_rad_s,
            theta2_rad: a.theta2_rad + b.theta2_rad,
            omega2_rad_s: a.omega2_rad_s + b.omega2_rad_s,
        }
    }

    fn scale(&self, a: &PendulumState, scale: f64) -> PendulumState {
        PendulumState {
            theta1_rad: scale * a.theta1_rad,
            omega1_rad_s: scale * a.omega1_rad_s,
            theta2_rad: scale * a.theta2_rad,
            omega2_rad_s: scale * a.omega2_rad_s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equilibrium_derivative_is_exactly_zero() {
        let d = derivs(&PendulumState::AT_REST, &PendulumParams::reference());
        assert_eq!(d.theta1_rad, 0.0);
        assert_eq!(d.omega1_rad_s, 0.0);
        assert_eq!(d.theta2_rad, 0.0);
        assert_eq!(d.omega2_rad_s, 0.0);
    }

    #[test]
    fn accepts_unwrapped_angles() {
        let params = PendulumParams::reference();
        let far = PendulumState::new(10.0 * std::f64::consts::PI, 3.0, -7.5, -40.0);
        let d = derivs(&far, &params);
        assert!(d.omega1_rad_s.is_finite());
        assert!(d.omega2_rad_s.is_finite());
    }

    #[test]
    fn unwrapped_angles_give_periodic_accelerations() {
        let params = PendulumParams::reference();
        let two_pi = 2.0 * std::f64::consts::PI;
        let a = PendulumState::new(0.7, 1.1, -0.4, 0.3);
        let b = PendulumState::new(0.7 + two_pi, 1.1, -0.4 - two_pi, 0.3);
        let da = derivs(&a, &params);
        let db = derivs(&b, &params);
        assert!((da.omega1_rad_s - db.omega1_rad_s).abs() < 1e-9);
        assert!((da.omega2_rad_s - db.omega2_rad_s).abs() < 1e-9);
    }

    #[test]
    fn rhs_matches_free_function() {
        let params = PendulumParams::reference();
        let model = DoublePendulum::new(params).unwrap();
        let state = PendulumState::from_degrees(120.0, 0.0, -20.0, 0.0);
        let from_trait = model.rhs(0.0, &state).unwrap();
        let from_fn = derivs(&state, &params);
        assert_eq!(from_trait, from_fn);
    }
}
