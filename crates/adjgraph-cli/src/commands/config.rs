//! Config command for managing CLI configuration

use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::Config;
use crate::Cli;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one config value
    Get {
        /// Config key: format, default_weight or strict
        key: String,
    },
    /// Change one config value and save the file
    Set {
        /// Config key: format, default_weight or strict
        key: String,
        /// New value
        value: String,
    },
    /// Print every config value
    List,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, cli: &Cli) -> anyhow::Result<()> {
    let path = cli.config_path();
    tracing::debug!("Using config file {:?}", path);

    match &args.command {
        ConfigCommands::Get { key } => {
            let config = Config::try_load_from(&path)?;
            let Some(value) = config.get(key) else {
                anyhow::bail!(
                    "Unknown config key: {} (available keys: {})",
                    key,
                    Config::keys().join(", ")
                );
            };
            println!("{}", value);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::try_load_from(&path)?;
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
        ConfigCommands::List => print_all(&path)?,
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("Created config file at {}", path.display());
        }
    }

    Ok(())
}

fn print_all(path: &Path) -> anyhow::Result<()> {
    let config = Config::try_load_from(path)?;
    let source = if path.exists() { "" } else { " (not created, showing defaults)" };
    println!("# {}{}", path.display(), source);
    for key in Config::keys() {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
    }
    Ok(())
}
