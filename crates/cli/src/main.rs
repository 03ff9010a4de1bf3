//! Command line tool for generating detector geometry
//!
//! ```sh
//! nxgeom tubes bifrost.json
//! nxgeom voxels dream.json
//! nxgeom inspect bifrost_baseline_with_detector.json 0 99
//! nxgeom example-config tubes > bifrost.json
//! ```

mod config;
mod error;
mod runner;

// standard library
use std::error::Error as _;
use std::path::PathBuf;

// crate modules
use crate::error::Result;
use crate::runner::Expectation;

// external crates
use clap::{Parser, Subcommand, ValueEnum};
use log::error;

#[derive(Parser)]
#[command(name = "nxgeom")]
#[command(about = "Detector geometry for neutron scattering instruments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode, suppresses all logging
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate tube bank pixels and write a JSON instrument document
    Tubes {
        /// Path to the tube pipeline configuration
        config: PathBuf,
    },
    /// Generate a voxel mesh from a lookup table and write an OFF file
    Voxels {
        /// Path to the voxel pipeline configuration
        config: PathBuf,
    },
    /// Look up pixel positions in a generated document
    Inspect {
        /// Generated JSON instrument document
        document: PathBuf,
        /// Pixel to locate
        first: u64,
        /// Second pixel, to report the vector and distance between them
        second: Option<u64>,
        /// Expected distance between the two pixels
        #[arg(long, requires = "second")]
        expect: Option<f64>,
        /// Allowed difference from the expected distance
        #[arg(long, default_value_t = 1e-6)]
        precision: f64,
        /// Exit with an error if the distance is outside the precision
        #[arg(long)]
        fatal: bool,
    },
    /// Print a default configuration to start from
    ExampleConfig {
        /// Pipeline to configure
        #[arg(value_enum)]
        pipeline: Pipeline,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Pipeline {
    Tubes,
    Voxels,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli.command) {
        error!("{e}");
        let mut source = e.source();
        while let Some(cause) = source {
            error!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Tubes { config } => runner::run_tubes(&config),
        Commands::Voxels { config } => runner::run_voxels(&config),
        Commands::Inspect {
            document,
            first,
            second,
            expect,
            precision,
            fatal,
        } => {
            let expectation = expect.map(|distance| Expectation {
                distance,
                precision,
                fatal,
            });
            runner::run_inspect(&document, first, second, expectation)
        }
        Commands::ExampleConfig { pipeline } => {
            let text = runner::example_config(matches!(pipeline, Pipeline::Voxels))?;
            println!("{text}");
            Ok(())
        }
    }
}

/// Logging to stderr for this binary and every nxgeom library
fn init_logging(verbose: u8, quiet: bool) {
    let result = stderrlog::new()
        .modules([
            module_path!(),
            "nxgeom_nexus",
            "nxgeom_off",
            "nxgeom_tubes",
            "nxgeom_voxels",
        ])
        .quiet(quiet)
        .verbosity(verbose as usize + 1)
        .show_level(true)
        .init();

    if let Err(e) = result {
        eprintln!("unable to initialise logging: {e}");
    }
}
