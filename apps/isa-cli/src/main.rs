mod cases;
mod error;
mod report;
mod units;

use clap::{Parser, Subcommand};
use error::CliResult;
use isa_aero::SpeedType;
use isa_atmosphere::{AltitudeKind, AltitudeSweep};
use isa_core::units::{Length, m};
use report::{AeroReport, AtmosphereReport};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use units::{LengthUnits, OutputFormat};

#[derive(Parser)]
#[command(name = "isa-cli")]
#[command(about = "ISA Toolkit CLI - standard atmosphere and airspeed calculations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the ISA atmosphere state at one altitude
    Isa {
        /// Altitude value
        altitude: f64,
        /// How the altitude is measured
        #[arg(long = "type", default_value = "geometric")]
        kind: AltitudeKind,
        #[arg(long, value_enum, default_value_t = LengthUnits::M)]
        units: LengthUnits,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Calculate the aerodynamic state for a speed at one altitude
    Aero {
        /// Speed value (m/s, or Mach number with --speed-type mach)
        speed: f64,
        /// TAS, EAS or mach
        #[arg(long, default_value = "TAS")]
        speed_type: SpeedType,
        #[arg(long, default_value_t = 0.0)]
        altitude: f64,
        #[arg(long, default_value = "geometric")]
        altitude_type: AltitudeKind,
        #[arg(long, value_enum, default_value_t = LengthUnits::M)]
        altitude_units: LengthUnits,
        /// Characteristic length (m)
        #[arg(long, default_value_t = isa_aero::DEFAULT_CHARACTERISTIC_LENGTH_M)]
        char_len: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Tabulate the atmosphere over an evenly spaced altitude range
    Profile {
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long)]
        end: f64,
        #[arg(long, default_value_t = 11)]
        points: usize,
        #[arg(long = "type", default_value = "geometric")]
        kind: AltitudeKind,
        #[arg(long, value_enum, default_value_t = LengthUnits::M)]
        units: LengthUnits,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Evaluate every case in a YAML case file
    Batch {
        /// Path to the case file
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Isa {
            altitude,
            kind,
            units,
            output,
        } => cmd_isa(altitude, kind, units, output),
        Commands::Aero {
            speed,
            speed_type,
            altitude,
            altitude_type,
            altitude_units,
            char_len,
            output,
        } => cmd_aero(
            speed,
            speed_type,
            altitude_units.length(altitude),
            altitude_type,
            char_len,
            output,
        ),
        Commands::Profile {
            start,
            end,
            points,
            kind,
            units,
            output,
        } => cmd_profile(
            AltitudeSweep::new(units.length(start), units.length(end), points)?,
            kind,
            output,
        ),
        Commands::Batch { path, output } => cmd_batch(&path, output),
    }
}

fn cmd_isa(
    altitude: f64,
    kind: AltitudeKind,
    units: LengthUnits,
    output: OutputFormat,
) -> CliResult<()> {
    let alt = units.length(altitude);
    debug!(altitude_m = alt.value, %kind, "isa");
    let state = isa_atmosphere::evaluate(alt, kind)?;
    match output {
        OutputFormat::Json => print_json(&AtmosphereReport::from(&state)),
        OutputFormat::Table => {
            print!("{}", report::atmosphere_table(&state));
            Ok(())
        }
    }
}

fn cmd_aero(
    speed: f64,
    speed_type: SpeedType,
    altitude: Length,
    altitude_type: AltitudeKind,
    char_len: f64,
    output: OutputFormat,
) -> CliResult<()> {
    let atmosphere = isa_atmosphere::evaluate(altitude, altitude_type)?;
    let aero = isa_aero::evaluate(speed, speed_type, &atmosphere, m(char_len))?;
    match output {
        OutputFormat::Json => print_json(&AeroReport::from(&aero)),
        OutputFormat::Table => {
            print!("{}", report::aero_table(speed, speed_type, &aero));
            Ok(())
        }
    }
}

fn cmd_profile(sweep: AltitudeSweep, kind: AltitudeKind, output: OutputFormat) -> CliResult<()> {
    debug!(%sweep, %kind, "profile");
    let states = sweep.evaluate(kind)?;
    match output {
        OutputFormat::Json => {
            let rows: Vec<AtmosphereReport> = states.iter().map(AtmosphereReport::from).collect();
            print_json(&rows)
        }
        OutputFormat::Table => {
            print!("{}", report::profile_table(&states));
            Ok(())
        }
    }
}

fn cmd_batch(path: &Path, output: OutputFormat) -> CliResult<()> {
    let rows = cases::load(path)?.run()?;
    match output {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            print!("{}", report::batch_table(&rows));
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_aero_arguments() {
        let cli = Cli::try_parse_from([
            "isa-cli",
            "aero",
            "0.8",
            "--speed-type",
            "mach",
            "--altitude",
            "35000",
            "--altitude-units",
            "ft",
        ])
        .unwrap();
        match cli.command {
            Commands::Aero {
                speed_type,
                altitude_units,
                char_len,
                ..
            } => {
                assert_eq!(speed_type, SpeedType::Mach);
                assert_eq!(altitude_units, LengthUnits::Ft);
                assert_eq!(char_len, 1.0);
            }
            _ => panic!("expected aero subcommand"),
        }
    }

    #[test]
    fn reject_unknown_speed_type_argument() {
        let result = Cli::try_parse_from(["isa-cli", "aero", "100", "--speed-type", "CAS"]);
        assert!(result.is_err());
    }

    #[test]
    fn failures_read_as_messages() {
        let cli = Cli::try_parse_from(["isa-cli", "isa", "40000", "--type", "geopotential"])
            .unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(
            err.to_string(),
            "geopotential altitude above 32000 m (got 40000)"
        );

        let cli = Cli::try_parse_from(["isa-cli", "aero", "--", "-5"]).unwrap();
        let message = run(cli).unwrap_err().to_string();
        assert!(message.starts_with("speed must be finite and non-negative"));
    }

    #[test]
    fn parse_isa_geopotential() {
        let cli =
            Cli::try_parse_from(["isa-cli", "isa", "11000", "--type", "geopotential"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Isa {
                kind: AltitudeKind::Geopotential,
                ..
            }
        ));
    }
}
