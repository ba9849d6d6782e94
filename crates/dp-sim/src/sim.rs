//! Simulation runner and result recording.

use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, RK4};
use crate::model::DynamicModel;

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit, checked before the run starts)
    pub max_steps: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            t_end: 1.0,
            max_steps: 1_000_000,
        }
    }
}

/// Record of a simulation run: the full state history on a uniform time grid.
///
/// Sample `i` corresponds to simulated time `i * dt`. Sample 0 is the initial
/// state. The record is created whole by [`run_sim`] and never mutated after.
#[derive(Clone, Debug, PartialEq)]
pub struct SimRecord<S> {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// State snapshots, one per grid point
    pub states: Vec<S>,
}

impl<S> SimRecord<S> {
    /// Number of samples (steps + 1).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Simulated time of sample `i`.
    pub fn time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    /// Sample `i` as `(time, state)`.
    pub fn sample(&self, i: usize) -> Option<(f64, &S)> {
        self.states.get(i).map(|s| (self.time(i), s))
    }

    /// Iterate over `(time, state)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, &S)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (self.time(i), s))
    }

    /// Final sample, if any.
    pub fn last(&self) -> Option<(f64, &S)> {
        if self.states.is_empty() {
            None
        } else {
            self.sample(self.states.len() - 1)
        }
    }
}

/// Run a simulation from `x0` using fixed-step RK4.
///
/// The step count `ceil(t_end / dt)` is fixed before the loop begins; every
/// grid point is recorded, so the record has `steps + 1` samples. All argument
/// validation happens here, up front: either the full record is produced or
/// nothing is.
pub fn run_sim<M: DynamicModel>(
    model: &M,
    x0: M::State,
    opts: &SimOptions,
) -> SimResult<SimRecord<M::State>> {
    let n_steps = checked_step_count(opts)?;

    tracing::debug!(
        dt = opts.dt,
        t_end = opts.t_end,
        steps = n_steps,
        "starting fixed-step integration"
    );

    let integrator = RK4;
    let mut x = x0;
    let mut states = Vec::with_capacity(n_steps + 1);
    states.push(x.clone());

    for i in 0..n_steps {
        let t = i as f64 * opts.dt;
        x = integrator.step(model, t, &x, opts.dt)?;
        states.push(x.clone());
    }

    Ok(SimRecord {
        dt: opts.dt,
        states,
    })
}

/// Validate options and compute the fixed step count.
fn checked_step_count(opts: &SimOptions) -> SimResult<usize> {
    if !opts.dt.is_finite() || opts.dt <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if !opts.t_end.is_finite() || opts.t_end <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "t_end must be positive",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }

    let ratio = (opts.t_end / opts.dt).ceil();
    if !ratio.is_finite() || ratio > opts.max_steps as f64 {
        return Err(SimError::InvalidArg {
            what: "step count exceeds max_steps",
        });
    }

    Ok(ratio as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.dt, 1e-3);
        assert_eq!(opts.t_end, 1.0);
        assert_eq!(opts.max_steps, 1_000_000);
    }

    #[test]
    fn step_count_rounds_up() {
        let opts = SimOptions {
            dt: 0.3,
            t_end: 1.0,
            max_steps: 100,
        };
        assert_eq!(checked_step_count(&opts).unwrap(), 4);

        let exact = SimOptions {
            dt: 0.25,
            t_end: 1.0,
            max_steps: 100,
        };
        assert_eq!(checked_step_count(&exact).unwrap(), 4);
    }

    #[test]
    fn step_count_rejects_bad_options() {
        let base = SimOptions::default();

        let zero_dt = SimOptions { dt: 0.0, ..base.clone() };
        assert!(matches!(
            checked_step_count(&zero_dt),
            Err(SimError::InvalidArg { .. })
        ));

        let negative_t_end = SimOptions {
            t_end: -1.0,
            ..base.clone()
        };
        assert!(matches!(
            checked_step_count(&negative_t_end),
            Err(SimError::InvalidArg { .. })
        ));

        let too_many = SimOptions {
            dt: 1e-9,
            t_end: 10.0,
            max_steps: 100,
        };
        assert!(matches!(
            checked_step_count(&too_many),
            Err(SimError::InvalidArg { .. })
        ));
    }
}
