//! Integration test: RK4 order verification on the harmonic oscillator.
//!
//! System: d²x/dt² = -x, exact solution x(t) = x0*cos(t) + v0*sin(t).
//! With x0 = 1, v0 = 0: x(t) = cos(t).

use dp_sim::{DynamicModel, SimOptions, SimResult, run_sim};

struct Oscillator;

#[derive(Clone, Debug)]
struct OscState {
    x: f64,
    v: f64,
}

impl DynamicModel for Oscillator {
    type State = OscState;

    fn rhs(&self, _t: f64, s: &OscState) -> SimResult<OscState> {
        Ok(OscState { x: s.v, v: -s.x })
    }

    fn add(&self, a: &OscState, b: &OscState) -> OscState {
        OscState {
            x: a.x + b.x,
            v: a.v + b.v,
        }
    }

    fn scale(&self, a: &OscState, scale: f64) -> OscState {
        OscState {
            x: scale * a.x,
            v: scale * a.v,
        }
    }
}

/// Max position error against cos(t) over one period at the given dt.
fn max_error(dt: f64) -> f64 {
    let t_end = 2.0 * std::f64::consts::PI;
    let opts = SimOptions {
        dt,
        t_end,
        max_steps: 1_000_000,
    };
    let record = run_sim(&Oscillator, OscState { x: 1.0, v: 0.0 }, &opts).expect("run failed");

    record
        .samples()
        .map(|(t, s)| (s.x - t.cos()).abs())
        .fold(0.0, f64::max)
}

#[test]
fn record_has_full_uniform_grid() {
    let opts = SimOptions {
        dt: 0.05,
        t_end: 1.0,
        max_steps: 1_000,
    };
    let record = run_sim(&Oscillator, OscState { x: 1.0, v: 0.0 }, &opts).expect("run failed");

    // ceil(1.0 / 0.05) = 20 steps, 21 samples
    assert_eq!(record.len(), 21);
    assert_eq!(record.time(0), 0.0);
    assert!((record.time(20) - 1.0).abs() < 1e-12);

    let (t_last, _) = record.last().expect("non-empty record");
    assert!((t_last - 1.0).abs() < 1e-12);
}

#[test]
fn rk4_is_fourth_order() {
    let coarse = max_error(0.1);
    let fine = max_error(0.05);

    // Halving dt should shrink the global error by ~2^4; allow slack for
    // floating-point noise but rule out a lower-order method.
    let ratio = coarse / fine;
    assert!(
        ratio > 8.0,
        "error ratio {ratio} too small for a 4th-order method (coarse {coarse}, fine {fine})"
    );

    // Absolute accuracy sanity check at dt = 0.05
    assert!(fine < 1e-5, "fine-grid error too large: {fine}");
}

#[test]
fn oscillator_energy_is_bounded() {
    let opts = SimOptions {
        dt: 0.01,
        t_end: 20.0,
        max_steps: 1_000_000,
    };
    let record = run_sim(&Oscillator, OscState { x: 1.0, v: 0.0 }, &opts).expect("run failed");

    for (t, s) in record.samples() {
        let energy = 0.5 * (s.x * s.x + s.v * s.v);
        assert!(
            (energy - 0.5).abs() < 1e-6,
            "energy {energy} drifted at t = {t}"
        );
    }
}
