use clap::{Parser, Subcommand};
use dp_core::units::{kg, m, mps2};
use dp_pendulum::{
    PendulumParams, PendulumState, SOLVER_VERSION, Trajectory, joint_positions, simulate,
    total_energy,
};
use dp_results::{RunConfig, RunManifest, RunStore, SampleRecord, compute_run_id, now_timestamp};
use dp_scenario::{InitialDef, ParamsDef, PendulumDef, Scenario};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Scenario error: {0}")]
    Scenario(#[from] dp_scenario::ScenarioError),

    #[error("Simulation error: {0}")]
    Sim(#[from] dp_sim::SimError),

    #[error("Results error: {0}")]
    Results(#[from] dp_results::ResultsError),

    #[error("Pendulum not found: {0}")]
    PendulumNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "dp-cli")]
#[command(about = "dpend CLI - double pendulum simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
    },
    /// List pendulums in a scenario
    Pendulums {
        /// Path to the scenario file
        scenario_path: PathBuf,
    },
    /// Run a simulation on the pendulum's time grid
    Run {
        /// Path to the scenario file
        scenario_path: PathBuf,
        /// Pendulum ID to simulate
        pendulum_id: String,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs for a pendulum
    Runs {
        /// Path to the scenario file
        scenario_path: PathBuf,
        /// Pendulum ID to list runs for
        pendulum_id: String,
    },
    /// Export trajectory data from a cached run as CSV
    ExportSeries {
        /// Path to the scenario file
        scenario_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Export projected joint positions instead of angles
        #[arg(long)]
        positions: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run a pendulum twice, the second time with theta1 offset, and report
    /// when the trajectories diverge
    Compare {
        /// Path to the scenario file
        scenario_path: PathBuf,
        /// Pendulum ID to compare against itself
        pendulum_id: String,
        /// Offset applied to the initial theta1, in degrees
        #[arg(long, default_value_t = 1.0)]
        offset_deg: f64,
        /// Divergence threshold on the (theta1, theta2) distance, in radians
        #[arg(long, default_value_t = 0.1)]
        threshold_rad: f64,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Pendulums { scenario_path } => cmd_pendulums(&scenario_path),
        Commands::Run {
            scenario_path,
            pendulum_id,
            no_cache,
        } => cmd_run(&scenario_path, &pendulum_id, !no_cache),
        Commands::Runs {
            scenario_path,
            pendulum_id,
        } => cmd_runs(&scenario_path, &pendulum_id),
        Commands::ExportSeries {
            scenario_path,
            run_id,
            positions,
            output,
        } => cmd_export_series(&scenario_path, &run_id, positions, output.as_deref()),
        Commands::Compare {
            scenario_path,
            pendulum_id,
            offset_deg,
            threshold_rad,
        } => cmd_compare(&scenario_path, &pendulum_id, offset_deg, threshold_rad),
    }
}

/// Load a scenario, choosing the format from the file extension.
fn load_scenario(path: &Path) -> CliResult<Scenario> {
    let scenario = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => dp_scenario::load_json(path)?,
        _ => dp_scenario::load_yaml(path)?,
    };
    Ok(scenario)
}

fn find_pendulum<'a>(scenario: &'a Scenario, pendulum_id: &str) -> CliResult<&'a PendulumDef> {
    scenario
        .pendulum(pendulum_id)
        .ok_or_else(|| CliError::PendulumNotFound(pendulum_id.to_string()))
}

fn build_params(def: &ParamsDef) -> CliResult<PendulumParams> {
    let params = PendulumParams::new(
        mps2(def.g_mps2),
        m(def.l1_m),
        m(def.l2_m),
        kg(def.m1_kg),
        kg(def.m2_kg),
    )?;
    Ok(params)
}

fn build_initial(def: &InitialDef) -> PendulumState {
    PendulumState::from_degrees(
        def.theta1_deg,
        def.omega1_deg_s,
        def.theta2_deg,
        def.omega2_deg_s,
    )
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    dp_scenario::validate_scenario(&scenario).map_err(dp_scenario::ScenarioError::from)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_pendulums(scenario_path: &Path) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;

    if scenario.pendulums.is_empty() {
        println!("No pendulums found in scenario");
    } else {
        println!("Pendulums in scenario:");
        for p in &scenario.pendulums {
            println!(
                "  {} - {} (theta1 = {}°, theta2 = {}°, dt = {} s, t_end = {} s)",
                p.id,
                p.name,
                p.initial.theta1_deg,
                p.initial.theta2_deg,
                p.grid.dt_s,
                p.grid.t_end_s
            );
        }
    }
    Ok(())
}

fn cmd_run(scenario_path: &Path, pendulum_id: &str, use_cache: bool) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let def = find_pendulum(&scenario, pendulum_id)?;

    let run_id = compute_run_id(def, SOLVER_VERSION);
    let store = RunStore::for_scenario(scenario_path)?;

    if use_cache && store.has_run(&run_id) {
        let samples = store.load_samples(&run_id)?;
        println!("✓ Loaded from cache: {}", run_id);
        println!("  Samples: {}", samples.len());
        return Ok(());
    }

    println!("Running simulation for pendulum: {}", pendulum_id);
    println!(
        "  dt = {:.3} s, t_end = {:.3} s",
        def.grid.dt_s, def.grid.t_end_s
    );

    let params = build_params(&def.params)?;
    let initial = build_initial(&def.initial);
    let trajectory = simulate(initial, &params, def.grid.dt_s, def.grid.t_end_s)?;

    let samples: Vec<SampleRecord> = trajectory
        .samples()
        .map(|(t, s)| SampleRecord {
            time_s: t,
            theta1_rad: s.theta1_rad,
            omega1_rad_s: s.omega1_rad_s,
            theta2_rad: s.theta2_rad,
            omega2_rad_s: s.omega2_rad_s,
        })
        .collect();

    let manifest = RunManifest {
        run_id: run_id.clone(),
        pendulum_id: pendulum_id.to_string(),
        timestamp: now_timestamp(),
        config: RunConfig {
            dt_s: def.grid.dt_s,
            t_end_s: def.grid.t_end_s,
            steps: trajectory.len().saturating_sub(1),
        },
        solver_version: SOLVER_VERSION.to_string(),
    };
    store.save_run(&manifest, &samples)?;

    println!("✓ Simulation completed: {}", run_id);
    println!("  Samples: {}", trajectory.len());
    print_energy_summary(&trajectory, &params);

    Ok(())
}

fn print_energy_summary(trajectory: &Trajectory, params: &PendulumParams) {
    let Some((_, first)) = trajectory.sample(0) else {
        return;
    };
    let e0 = total_energy(first, params);
    let max_drift = trajectory
        .samples()
        .map(|(_, s)| (total_energy(s, params) - e0).abs())
        .fold(0.0, f64::max);

    println!("  Initial energy: {:.6} J", e0);
    if e0.abs() > 1e-12 {
        println!(
            "  Max energy drift: {:.3e} J ({:.4}% of initial)",
            max_drift,
            100.0 * max_drift / e0.abs()
        );
    } else {
        println!("  Max energy drift: {:.3e} J", max_drift);
    }
}

fn cmd_runs(scenario_path: &Path, pendulum_id: &str) -> CliResult<()> {
    let store = RunStore::for_scenario(scenario_path)?;
    let runs = store.list_runs(pendulum_id)?;

    if runs.is_empty() {
        println!("No cached runs found for pendulum: {}", pendulum_id);
    } else {
        println!("Cached runs for pendulum '{}':", pendulum_id);
        for manifest in runs {
            println!(
                "  {} ({}, {} steps at dt = {} s)",
                manifest.run_id, manifest.timestamp, manifest.config.steps, manifest.config.dt_s
            );
        }
    }
    Ok(())
}

fn cmd_export_series(
    scenario_path: &Path,
    run_id: &str,
    positions: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let store = RunStore::for_scenario(scenario_path)?;
    let manifest = store.load_manifest(run_id)?;
    let samples = store.load_samples(run_id)?;

    let csv = if positions {
        // Projection needs the rod lengths, which live in the scenario.
        let scenario = load_scenario(scenario_path)?;
        let def = find_pendulum(&scenario, &manifest.pendulum_id)?;
        let params = build_params(&def.params)?;

        let mut csv = String::from("time_s,x1_m,y1_m,x2_m,y2_m\n");
        for sample in &samples {
            let state = PendulumState::new(
                sample.theta1_rad,
                sample.omega1_rad_s,
                sample.theta2_rad,
                sample.omega2_rad_s,
            );
            let pos = joint_positions(&state, &params);
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                sample.time_s, pos.x1_m, pos.y1_m, pos.x2_m, pos.y2_m
            ));
        }
        csv
    } else {
        let mut csv = String::from("time_s,theta1_rad,omega1_rad_s,theta2_rad,omega2_rad_s\n");
        for sample in &samples {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                sample.time_s,
                sample.theta1_rad,
                sample.omega1_rad_s,
                sample.theta2_rad,
                sample.omega2_rad_s
            ));
        }
        csv
    };

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} samples to {}", samples.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_compare(
    scenario_path: &Path,
    pendulum_id: &str,
    offset_deg: f64,
    threshold_rad: f64,
) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let def = find_pendulum(&scenario, pendulum_id)?;

    let params = build_params(&def.params)?;
    let base = build_initial(&def.initial);
    let perturbed = PendulumState::from_degrees(
        def.initial.theta1_deg + offset_deg,
        def.initial.omega1_deg_s,
        def.initial.theta2_deg,
        def.initial.omega2_deg_s,
    );

    println!(
        "Comparing '{}' against itself with theta1 offset by {}°",
        pendulum_id, offset_deg
    );

    // The two runs share nothing mutable, so they can execute concurrently.
    let (res_a, res_b) = rayon::join(
        || simulate(base, &params, def.grid.dt_s, def.grid.t_end_s),
        || simulate(perturbed, &params, def.grid.dt_s, def.grid.t_end_s),
    );
    let a = res_a?;
    let b = res_b?;

    let mut crossing: Option<f64> = None;
    let mut max_distance: f64 = 0.0;
    for ((t, sa), (_, sb)) in a.samples().zip(b.samples()) {
        let distance = ((sa.theta1_rad - sb.theta1_rad).powi(2)
            + (sa.theta2_rad - sb.theta2_rad).powi(2))
        .sqrt();
        max_distance = max_distance.max(distance);
        if crossing.is_none() && distance > threshold_rad {
            crossing = Some(t);
        }
    }

    match crossing {
        Some(t) => println!(
            "✓ Trajectories diverged past {} rad at t = {:.2} s",
            threshold_rad, t
        ),
        None => println!(
            "Trajectories stayed within {} rad for the whole run",
            threshold_rad
        ),
    }
    println!("  Max (theta1, theta2) distance: {:.4} rad", max_distance);

    Ok(())
}
