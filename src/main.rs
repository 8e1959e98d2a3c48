//! Trafo - Single-phase transformer calculator
//!
//! Dimensions a transformer from a JSON description and runs the bench
//! analyses (equivalent circuit, regulation, magnetizing current).
//!
//! # Usage
//!
//! ```bash
//! trafo dimension design.json
//! trafo equivalent tests.json --output circuit.json
//! trafo regulation
//! trafo magnetizing curve.json --params supply.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use trafo_core::{
    analysis::{self, BenchTests, LoadPoint, MagnetizationCurve, MagnetizingParams},
    error::Result,
    io, DesignOptions, Designer, RawSpec,
};

/// Single-phase transformer calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write the JSON result to a file instead of stdout
    #[arg(short, long, value_name = "PATH", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dimension core and windings from a transformer description
    Dimension {
        /// Path to the transformer description (.json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Minimum window/copper ratio for a feasible design
        #[arg(long, default_value_t = trafo_core::design::DEFAULT_MIN_WINDOW_RATIO)]
        min_ratio: f64,
    },

    /// Equivalent circuit from open- and short-circuit test readings
    Equivalent {
        /// Path to the bench test data (.json); defaults are used when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Voltage regulation for a load point
    Regulation {
        /// Path to the load point (.json); defaults are used when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Magnetizing current through a measured magnetization curve
    Magnetizing {
        /// Path to the curve, an array of {"MMF", "Fluxo"} points (.json)
        #[arg(value_name = "CURVE_FILE")]
        curve: PathBuf,

        /// Path to the supply and sampling parameters (.json)
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<()> {
    let output = args.output.as_deref();

    match args.command {
        Command::Dimension { file, min_ratio } => {
            let raw: RawSpec = io::read_json(&file)?;
            let designer = Designer::with_options(DesignOptions::new().with_min_window_ratio(min_ratio));
            let report = designer.run_raw(&raw)?;
            io::write_output(output, &report)
        }
        Command::Equivalent { file } => {
            let tests: BenchTests = io::read_json_or_default(file.as_deref())?;
            let circuit = analysis::equivalent_circuit(&tests)?;
            io::write_output(output, &circuit)
        }
        Command::Regulation { file } => {
            let load: LoadPoint = io::read_json_or_default(file.as_deref())?;
            let result = analysis::regulation(&load)?;
            io::write_output(output, &result)
        }
        Command::Magnetizing { curve, params } => {
            let curve = read_curve(&curve)?;
            let params: MagnetizingParams = io::read_json_or_default(params.as_deref())?;
            let wave = analysis::magnetizing_current(&curve, &params)?;
            io::write_output(output, &wave)
        }
    }
}

fn read_curve(path: &Path) -> Result<MagnetizationCurve> {
    MagnetizationCurve::from_json(&io::read_file(path)?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
