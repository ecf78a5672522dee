//! Config file commands.

use anyhow::Context;
use clap::Subcommand;

use super::{Cli, effective_config};
use crate::config::{self, Config};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Write a config file populated with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn cmd_config(cli: &Cli, command: &ConfigCommand) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = effective_config(cli)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let target = match &cli.config {
                Some(path) => path.clone(),
                None => config::config_path().context("Could not determine config directory")?,
            };

            if target.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {:?} (use --force to overwrite)",
                    target
                );
            }

            let path = match &cli.config {
                Some(path) => {
                    config::save_to(&Config::default(), path)?;
                    path.clone()
                }
                None => config::save(&Config::default())?,
            };
            println!("Wrote default config to {:?}", path);
            Ok(())
        }
    }
}
