use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use orbit_simulation::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Trajectory of a body under central gravity with drag and thrust"
)]
struct Cli {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// m: orbiting body mass, kg
    #[arg(long)]
    orbiting_mass: Option<String>,

    /// M: central body mass, kg
    #[arg(long)]
    central_mass: Option<String>,

    /// V0: initial speed, m/s
    #[arg(long)]
    speed: Option<String>,

    /// T: simulated time, days
    #[arg(long)]
    days: Option<String>,

    /// k: dimensionless drag coefficient
    #[arg(long)]
    drag: Option<String>,

    /// F: dimensionless thrust coefficient
    #[arg(long)]
    thrust: Option<String>,

    /// Normalized time step
    #[arg(long)]
    dt: Option<f64>,

    /// Integration scheme
    #[arg(long, value_enum)]
    method: Option<MethodArg>,

    /// Write the `x y` trajectory dump to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of rows in the printed table
    #[arg(long)]
    table_rows: Option<usize>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum MethodArg {
    Rk4,
    Euler,
}

impl From<MethodArg> for IntegrationMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Rk4 => IntegrationMethod::RungeKutta4,
            MethodArg::Euler => IntegrationMethod::SemiImplicitEuler,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let (units, params) = UnitSystem::to_normalized(&config.inputs, &config.integration)?;
    info!(
        steps = params.steps,
        dt = params.dt,
        time_unit_s = units.time_unit,
        length_unit_m = units.length_unit,
        "running simulation"
    );

    let trajectory = run_simulation(&params)?;

    let telemetry = Telemetry::new(units, params.dt);
    if let Some(summary) =
        TrajectorySummary::from_trajectory(&trajectory, params.gravitational_parameter(), params.dt)
    {
        telemetry.display_summary(&summary);
    }

    let rows = telemetry.table_rows(&trajectory, config.output.table_rows);
    print!("{}", Telemetry::render_table(&rows));

    if let Some(path) = &config.output.trajectory_file {
        save_trajectory(&trajectory, path)?;
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<SimulationConfig, SimulationError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };

    let inputs = &mut config.inputs;
    let overrides: [(&str, &Option<String>, &mut f64); 6] = [
        ("m", &cli.orbiting_mass, &mut inputs.orbiting_mass_kg),
        ("M", &cli.central_mass, &mut inputs.central_mass_kg),
        ("V0", &cli.speed, &mut inputs.initial_speed_m_s),
        ("T", &cli.days, &mut inputs.duration_days),
        ("k", &cli.drag, &mut inputs.drag_coefficient),
        ("F", &cli.thrust, &mut inputs.thrust_coefficient),
    ];
    for (field, text, target) in overrides {
        if let Some(text) = text {
            *target = parse_field(field, text)?;
        }
    }

    if let Some(dt) = cli.dt {
        config.integration.dt = dt;
    }
    if let Some(method) = cli.method {
        config.integration.method = method.into();
    }
    if let Some(path) = &cli.output {
        config.output.trajectory_file = Some(path.clone());
    }
    if let Some(rows) = cli.table_rows {
        config.output.table_rows = rows;
    }

    Ok(config)
}
