//! taxlens: GST invoice compliance checks with evidenced explanations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use taxlens_core::TaxlensConfig;
use taxlens_engine::tracing_setup::init_tracing;

mod commands;

#[derive(Parser)]
#[command(name = "taxlens")]
#[command(about = "Check tax invoices for GST compliance issues and explain them", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable every noise term for reproducible output
    #[arg(long, global = true)]
    deterministic: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process invoice records from a JSON file (one object or an array)
    Process {
        /// Input records
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Run the three reference invoices through the pipeline
    Demo,

    /// Write sample weight artifacts
    GenerateWeights {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn load_config(cli: &Cli) -> Result<TaxlensConfig> {
    let mut config = match &cli.config {
        Some(path) => TaxlensConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TaxlensConfig::default(),
    };
    config.apply_env_overrides();
    if cli.deterministic {
        config.noise.enabled = false;
    }
    match cli.verbose {
        0 => {}
        1 => config.observability.log_level = "debug".to_string(),
        _ => config.observability.log_level = "trace".to_string(),
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.observability);

    match &cli.command {
        Commands::Process { input } => commands::process::run(config, input),
        Commands::Demo => commands::demo::run(config),
        Commands::GenerateWeights { out } => commands::generate::run(&config, out),
    }
}
