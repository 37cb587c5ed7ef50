//! Run command: apply a graph script and print the result

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::Config;
use crate::output::{format_output, GraphSummary, OutputFormat};
use crate::script::{apply, parse_script, ScriptOptions};
use crate::Cli;
use adjgraph_core::Graph;

#[derive(Args)]
pub struct RunArgs {
    /// Script file (stdin if omitted)
    pub file: Option<PathBuf>,

    /// Abort on the first rejected edge
    #[arg(long)]
    pub strict: bool,

    /// Weight for edges that do not give one
    #[arg(short = 'w', long)]
    pub default_weight: Option<f64>,
}

pub fn run(args: &RunArgs, cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load_from(&cli.config_path());

    let source = match &args.file {
        Some(path) => {
            tracing::debug!("Reading script from {:?}", path);
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    let commands = parse_script(&source)?;
    let options = ScriptOptions {
        default_weight: args.default_weight.unwrap_or(config.default_weight),
        strict: args.strict || config.strict,
    };

    let mut graph = Graph::new();
    let rejected = apply(&mut graph, &commands, &options)?;

    if cli.quiet {
        return Ok(());
    }

    let format = match cli.format {
        Some(format) => format,
        None => config.format.parse::<OutputFormat>()?,
    };
    println!("{}", format_output(&GraphSummary::new(&graph, rejected), format));
    Ok(())
}
