mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mowsim",
    about = "Simulate mowers sharing a lawn, each running its commands concurrently",
    version,
    propagate_version = true
)]
struct Cli {
    /// Simulation config file (default: ./mowsim.yaml if present)
    #[arg(long, global = true, env = "MOWSIM_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log every applied step to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print each mower's final position
    Run {
        /// Input file: lawn far corner, then one position line and one command line per mower
        input: PathBuf,

        /// Abort if the run takes longer than this (overrides the config file)
        #[arg(long)]
        deadline_ms: Option<u64>,
    },

    /// Validate an input file and mower placement without running
    Check {
        /// Input file to validate
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run { input, deadline_ms } => {
            cmd::load_config(cli.config.as_deref(), deadline_ms)
                .and_then(|config| cmd::run::run(&input, config, cli.json))
        }
        Commands::Check { input } => cmd::check::run(&input, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
