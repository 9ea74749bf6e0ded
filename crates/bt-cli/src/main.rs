//! CLI frontend for the Beutel loot table engine.

mod commands;
mod config;
mod context;
mod definition;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::RollConfig;
use crate::context::Context;
use crate::error::CliResult;

#[derive(Parser)]
#[command(
    name = "bt",
    about = "Beutel — roll weighted loot tables from JSON definitions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log sampling decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a loot table and print the produced values
    Roll {
        /// Table definition file (JSON)
        file: PathBuf,

        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// How many times to sample the table (at least 1)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        times: u32,

        /// Context value checked by pool conditions, as key=value
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Validate a definition and summarize its pools
    Check {
        /// Table definition file (JSON)
        file: PathBuf,
    },

    /// Sample a loot table many times and report value frequencies
    Stats {
        /// Table definition file (JSON)
        file: PathBuf,

        /// Number of samples to take (at least 1)
        #[arg(short = 'n', long, default_value = "1000", value_parser = clap::value_parser!(u32).range(1..))]
        samples: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Context value checked by pool conditions, as key=value
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(command: Commands) -> CliResult<()> {
    match command {
        Commands::Roll {
            file,
            seed,
            times,
            set,
        } => {
            let config = RollConfig::default().with_seed(seed).with_times(times);
            let context = Context::from_assignments(&set)?;
            commands::roll::run(&file, &config, &context)
        }
        Commands::Check { file } => commands::check::run(&file),
        Commands::Stats {
            file,
            samples,
            seed,
            set,
        } => {
            let config = RollConfig::default()
                .with_seed(seed)
                .with_samples(samples);
            let context = Context::from_assignments(&set)?;
            commands::stats::run(&file, &config, &context)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
