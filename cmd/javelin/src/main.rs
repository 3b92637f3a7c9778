//! Javelin CLI - JVM chaos experiment validation.
//!
//! Commands:
//! - `javelin validate` - Check an experiment manifest against the rule catalog
//! - `javelin targets` - List catalog targets and their supported actions
//! - `javelin explain` - Show the parameter schema for one target/action pair
//! - `javelin init` - Scaffold a starter experiment manifest

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "javelin")]
#[command(about = "Validate JVM chaos experiment manifests against the rule catalog")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an experiment manifest
    Validate {
        /// Path to the experiment manifest (YAML, or JSON by extension)
        #[arg(short, long, default_value = "experiment.yaml")]
        experiment: String,
    },

    /// List every catalog target with its supported actions
    Targets,

    /// Show the flags/matchers schema for one target/action pair
    Explain {
        /// Target wire name, e.g. HTTP
        #[arg(short, long)]
        target: String,

        /// Action wire name, e.g. delay
        #[arg(short, long)]
        action: String,
    },

    /// Initialize a starter experiment manifest
    Init {
        /// Output path for the manifest
        #[arg(default_value = "experiment.yaml")]
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Validate { experiment } => commands::validate::run(&experiment),
        Commands::Targets => commands::targets::run(),
        Commands::Explain { target, action } => commands::explain::run(&target, &action),
        Commands::Init { path } => commands::init::run(&path),
    }
}
