//! adjgraph CLI - Build an in-memory graph from a command script

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod script;

use commands::{config as config_cmd, run};

#[derive(Parser)]
#[command(name = "adjgraph")]
#[command(author, version, about = "Adjacency-list directed graph toolkit")]
pub struct Cli {
    /// Config file (default: ~/.adjgraph/config.toml)
    #[arg(long, global = true, env = "ADJGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum, ignore_case = true)]
    pub format: Option<output::OutputFormat>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a graph script and print the resulting graph
    Run(run::RunArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting adjgraph CLI");

    match &cli.command {
        Commands::Run(args) => run::run(args, &cli)?,
        Commands::Config(args) => config_cmd::run(args, &cli)?,
    }

    Ok(())
}
