//! Instantaneous pendulum state.

/// Angles and angular velocities of the two rods.
///
/// Angles are radians from the downward vertical. No range is enforced:
/// after a few swings theta may sit far outside [-pi, pi], and that is the
/// point — unwrapped angles keep the trajectory continuous.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumState {
    pub theta1_rad: f64,
    pub omega1_rad_s: f64,
    pub theta2_rad: f64,
    pub omega2_rad_s: f64,
}

impl PendulumState {
    /// Stable equilibrium: both rods hanging straight down, at rest.
    pub const AT_REST: Self = Self {
        theta1_rad: 0.0,
        omega1_rad_s: 0.0,
        theta2_rad: 0.0,
        omega2_rad_s: 0.0,
    };

    pub fn new(theta1_rad: f64, omega1_rad_s: f64, theta2_rad: f64, omega2_rad_s: f64) -> Self {
        Self {
            theta1_rad,
            omega1_rad_s,
            theta2_rad,
            omega2_rad_s,
        }
    }

    /// Initial conditions as scenario files author them: degrees and deg/s.
    pub fn from_degrees(
        theta1_deg: f64,
        omega1_deg_s: f64,
        theta2_deg: f64,
        omega2_deg_s: f64,
    ) -> Self {
        use dp_core::units::{deg, degps};
        Self {
            theta1_rad: deg(theta1_deg).value,
            omega1_rad_s: degps(omega1_deg_s).value,
            theta2_rad: deg(theta2_deg).value,
            omega2_rad_s: degps(omega2_deg_s).value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_degrees_converts() {
        let state = PendulumState::from_degrees(180.0, 0.0, -90.0, 360.0);
        assert!((state.theta1_rad - std::f64::consts::PI).abs() < 1e-12);
        assert!((state.theta2_rad + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((state.omega2_rad_s - 2.0 * std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(state.omega1_rad_s, 0.0);
    }

    #[test]
    fn at_rest_is_all_zero() {
        let z = PendulumState::AT_REST;
        assert_eq!(z, PendulumState::new(0.0, 0.0, 0.0, 0.0));
    }
}
