// CLI for running journey simulations from a terminal

use anyhow::Context;
use clap::{Parser, Subcommand};
use journey_sim::{EngineConfig, JourneySimulator, PersonaCatalog};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod commands {
    pub mod compare;
    pub mod output;
    pub mod personas;
    pub mod run;
}

#[derive(Parser)]
#[command(name = "journey")]
#[command(about = "Journey - Client Journey Simulation Engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Persona catalog file (TOML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List available personas
    Personas,

    /// Simulate one persona
    Run {
        /// Persona key (unknown keys fall back to the catalog default)
        #[arg(short, long, default_value = "hot_lead")]
        persona: String,

        /// Days to simulate (clamped to the configured bounds)
        #[arg(short, long)]
        days: Option<u32>,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Simulate two personas under the same seed and compare them
    Compare {
        /// First persona key
        #[arg(long, default_value = "ghosting_lead")]
        persona_a: String,

        /// Second persona key
        #[arg(long, default_value = "slow_nurture")]
        persona_b: String,

        /// Days to simulate (clamped to the configured bounds)
        #[arg(short, long)]
        days: Option<u32>,

        /// Seed shared by both runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn build_simulator(cli: &Cli) -> anyhow::Result<JourneySimulator> {
    let config = match &cli.config {
        Some(path) => {
            let config = EngineConfig::load_from_file(path)
                .with_context(|| format!("loading engine config {}", path.display()))?;
            info!(path = %path.display(), max_days = config.max_days, "loaded engine config");
            config
        }
        None => EngineConfig::default(),
    };
    let catalog = match &cli.catalog {
        Some(path) => {
            let catalog = PersonaCatalog::load_from_file(path)
                .with_context(|| format!("loading persona catalog {}", path.display()))?;
            info!(path = %path.display(), personas = catalog.len(), "loaded persona catalog");
            catalog
        }
        None => PersonaCatalog::builtin(),
    };
    Ok(JourneySimulator::new(Arc::new(catalog), config)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let simulator = build_simulator(&cli)?;
    let default_days = simulator.config().default_days;

    match cli.command {
        Commands::Personas => {
            commands::personas::list(&simulator, cli.pretty)?;
        }
        Commands::Run {
            persona,
            days,
            seed,
        } => {
            let days = days.unwrap_or(default_days);
            commands::run::run(&simulator, &persona, days, seed, cli.pretty)?;
        }
        Commands::Compare {
            persona_a,
            persona_b,
            days,
            seed,
        } => {
            let days = days.unwrap_or(default_days);
            commands::compare::run(&simulator, &persona_a, &persona_b, days, seed, cli.pretty)?;
        }
    }

    Ok(())
}
