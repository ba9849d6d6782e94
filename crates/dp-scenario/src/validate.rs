//! Scenario validation logic.

use crate::schema::{LATEST_VERSION, PendulumDef, Scenario};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let mut pendulum_ids = HashSet::new();
    for pendulum in &scenario.pendulums {
        if !pendulum_ids.insert(&pendulum.id) {
            return Err(ValidationError::DuplicateId {
                id: pendulum.id.clone(),
                context: "pendulums".to_string(),
            });
        }
        validate_pendulum(pendulum)?;
    }

    Ok(())
}

fn validate_pendulum(pendulum: &PendulumDef) -> Result<(), ValidationError> {
    let field = |suffix: &str| format!("{}.{}", pendulum.id, suffix);

    check_finite(&field("params.g_mps2"), pendulum.params.g_mps2)?;
    check_positive(&field("params.l1_m"), pendulum.params.l1_m)?;
    check_positive(&field("params.l2_m"), pendulum.params.l2_m)?;
    check_positive(&field("params.m1_kg"), pendulum.params.m1_kg)?;
    check_positive(&field("params.m2_kg"), pendulum.params.m2_kg)?;

    check_finite(&field("initial.theta1_deg"), pendulum.initial.theta1_deg)?;
    check_finite(&field("initial.omega1_deg_s"), pendulum.initial.omega1_deg_s)?;
    check_finite(&field("initial.theta2_deg"), pendulum.initial.theta2_deg)?;
    check_finite(&field("initial.omega2_deg_s"), pendulum.initial.omega2_deg_s)?;

    check_positive(&field("grid.dt_s"), pendulum.grid.dt_s)?;
    check_positive(&field("grid.t_end_s"), pendulum.grid.t_end_s)?;

    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{InitialDef, ParamsDef, TimeGridDef};

    fn pendulum(id: &str) -> PendulumDef {
        PendulumDef {
            id: id.to_string(),
            name: format!("Pendulum {id}"),
            params: ParamsDef::default(),
            initial: InitialDef {
                theta1_deg: 120.0,
                omega1_deg_s: 0.0,
                theta2_deg: -20.0,
                omega2_deg_s: 0.0,
            },
            grid: TimeGridDef {
                dt_s: 0.05,
                t_end_s: 20.0,
            },
        }
    }

    fn scenario() -> Scenario {
        Scenario {
            version: 1,
            name: "test".to_string(),
            pendulums: vec![pendulum("p1"), pendulum("p2")],
        }
    }

    #[test]
    fn valid_scenario_passes() {
        assert!(validate_scenario(&scenario()).is_ok());
    }

    #[test]
    fn duplicate_pendulum_ids_rejected() {
        let mut s = scenario();
        s.pendulums.push(pendulum("p1"));
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut s = scenario();
        s.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn nonpositive_mass_rejected() {
        let mut s = scenario();
        s.pendulums[0].params.m1_kg = 0.0;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn nonpositive_grid_rejected() {
        let mut s = scenario();
        s.pendulums[1].grid.dt_s = -0.05;
        assert!(validate_scenario(&s).is_err());

        let mut s = scenario();
        s.pendulums[0].grid.t_end_s = 0.0;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn non_finite_initial_angle_rejected() {
        let mut s = scenario();
        s.pendulums[0].initial.theta1_deg = f64::NAN;
        assert!(validate_scenario(&s).is_err());
    }
}
