mod czml;
mod generator;
mod orbit;
mod scenario;

use chrono::{DurationRound, TimeDelta, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::generator::GenerateError;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "czml-orbits")]
#[command(about = "Propagate TLE element sets into a CZML document for a Cesium globe")]
struct Cli {
    /// Scenario file (YAML); the built-in four satellite demo is used when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory that relative output paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Propagate and write the CZML document (default)
    Generate {
        /// Output file, overriding the scenario's
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check that every element set parses and propagates, without writing
    Validate,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Validate) => validate(cli.config),
        Some(Commands::Generate { output }) => generate(cli.config, &cli.root, output),
        None => generate(cli.config, &cli.root, None),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_scenario(config: Option<PathBuf>) -> Result<Scenario, GenerateError> {
    let now = Utc::now();
    let now = now.duration_trunc(TimeDelta::seconds(1)).unwrap_or(now);

    let scenario = match config {
        Some(path) => {
            log::info!("Loading scenario from {}", path.display());
            Scenario::from_file(&path, now)?
        }
        None => Scenario::builtin(now)?,
    };
    Ok(scenario)
}

fn generate(
    config: Option<PathBuf>,
    root: &std::path::Path,
    output: Option<PathBuf>,
) -> Result<(), GenerateError> {
    let mut scenario = load_scenario(config)?;
    if let Some(output) = output {
        scenario.output = output;
    }

    let summary = generator::run(&scenario, root)?;
    println!("{}", summary);
    Ok(())
}

fn validate(config: Option<PathBuf>) -> Result<(), GenerateError> {
    let scenario = load_scenario(config)?;
    let checked = generator::check(&scenario)?;

    println!(
        "Scenario is valid ({} satellites, {} samples each over {})",
        checked.len(),
        scenario.window.sample_count(),
        scenario.window.interval()
    );
    for (sat, record) in checked.iter().zip(&scenario.satellites) {
        println!(
            "  {} [{}] epoch {} size {} @ start: lat {:.2} lon {:.2} alt {:.0} km",
            sat.name,
            sat.norad_id,
            sat.epoch.format("%Y-%m-%d %H:%M:%S"),
            record.icon_size,
            sat.first.latitude_deg,
            sat.first.longitude_deg,
            sat.first.altitude_m / 1000.0
        );
    }
    Ok(())
}
