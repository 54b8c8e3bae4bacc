use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, debug};

use rs_planar_fk::format::{MatrixFormat, format_matrix, overlay_text, rotation_label};
use rs_planar_fk::kinematic_traits::{PlanarKinematics, ReferencePoint};
use rs_planar_fk::parameters::{ChainConfig, LinkChainParameters};
use rs_planar_fk::planar_chain::PlanarChainSolver;
use rs_planar_fk::rotation::{Axis, RotationMatrixBuilder};

/// Elementary rotation matrices and two-link planar forward kinematics.
#[derive(Parser)]
#[command(name = "rs-planar-fk", version)]
struct Cli {
    /// Log solver inputs to standard error
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rotation matrix about x, y or z. Prompts for anything not given.
    Rotate {
        #[arg(long)]
        axis: Option<String>,
        /// Angle in degrees
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f64>,
        #[arg(long, default_value_t = 10)]
        width: usize,
        #[arg(long, default_value_t = 4)]
        precision: usize,
    },
    /// Solve one frame of the two-link arm centered on the drawing surface
    Chain {
        /// YAML chain configuration (link lengths, angles, reference)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, allow_hyphen_values = true)]
        theta1: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        theta2: Option<f64>,
        /// Drawing surface width, used for the reference point without --config
        #[arg(long, default_value_t = 600)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    match run(cli.command, &mut io::stdin().lock(), &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(1)
        }
    }
}

/// Executes one command, prompting on `output` and reading answers from `input`.
fn run(command: Command, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    match command {
        Command::Rotate { axis, angle, width, precision } => {
            let axis = match axis {
                Some(token) => token,
                None => prompt("Axis (x/y/z): ", input, output)?,
            };
            let angle = match angle {
                Some(degrees) => degrees,
                None => prompt("Angle (degrees): ", input, output)?
                    .parse::<f64>()
                    .context("Invalid angle.")?,
            };
            let axis: Axis = axis.parse()?;
            let matrix = RotationMatrixBuilder::build(axis, angle)?;
            write!(output, "{}", format_matrix(&matrix, &rotation_label(axis, angle), MatrixFormat { width, precision }))?;
        }
        Command::Chain { config, theta1, theta2, width, height } => {
            let config = match config {
                Some(path) => ChainConfig::from_yaml_file(&path)
                    .with_context(|| format!("Failed to read chain configuration {}", path.display()))?,
                None => ChainConfig {
                    parameters: LinkChainParameters::two_link_demo(),
                    reference: ReferencePoint::center_of(width, height),
                },
            };
            let current = config.parameters;
            let params = current.with_angles(
                theta1.unwrap_or(current.theta1),
                theta2.unwrap_or(current.theta2),
            );
            debug!(?params, "chain frame");

            let pose = PlanarChainSolver.solve(&params, config.reference)?;
            let (j1, j2) = (pose.joint1(), pose.joint2());
            writeln!(output, "joint1: ({:.3}, {:.3})", j1.x, j1.y)?;
            writeln!(output, "joint2: ({:.3}, {:.3})", j2.x, j2.y)?;
            writeln!(output, "{}", overlay_text(&pose, config.reference, params.theta1, params.theta2))?;
        }
    }
    Ok(())
}

/// Shows `label` and reads one trimmed line. End of input is an error.
fn prompt(label: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read standard input")? == 0 {
        bail!("Unexpected end of input");
    }
    Ok(line.trim().to_string())
}
