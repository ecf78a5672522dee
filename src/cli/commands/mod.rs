//! CLI command definitions and dispatch.
//!
//! Each command group is implemented in its own submodule:
//! - `users`: user search, lookup, favourites and uploads
//! - `tracks`: track search, lookup, trending and streaming
//! - `playlists`: playlist search, lookup and contents
//! - `config`: showing and creating the config file

mod config;
mod playlists;
mod tracks;
mod users;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::client::AudiusClient;
use crate::config::Config;
use crate::model::Genre;

pub use config::{ConfigCommand, cmd_config};
pub use playlists::{PlaylistsCommand, cmd_playlists};
pub use tracks::{TracksCommand, cmd_tracks};
pub use users::{UsersCommand, cmd_users};

/// Audius API client
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// App name sent with every request (overrides the config file)
    #[arg(long, global = true, env = "AUDIUS_APP_NAME")]
    pub app_name: Option<String>,

    /// Use this API host instead of discovering one
    #[arg(long, global = true, env = "AUDIUS_HOST")]
    pub host: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the API host in use
    Host {
        /// Discard the cached host and discover a new one
        #[arg(long)]
        refresh: bool,
    },
    /// Search and fetch users
    #[command(subcommand)]
    Users(UsersCommand),
    /// Search, fetch, rank and stream tracks
    #[command(subcommand)]
    Tracks(TracksCommand),
    /// Search and fetch playlists
    #[command(subcommand)]
    Playlists(PlaylistsCommand),
    /// Resolve an audius.co link to its API resource URL
    Resolve {
        /// Permalink, e.g. https://audius.co/artist/track
        url: String,
    },
    /// List known genres
    Genres,
    /// Show or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Host { refresh } => cmd_host(&rt, &build_client(cli)?, *refresh),
        Commands::Users(command) => cmd_users(&rt, &build_client(cli)?, command),
        Commands::Tracks(command) => cmd_tracks(&rt, &build_client(cli)?, command),
        Commands::Playlists(command) => cmd_playlists(&rt, &build_client(cli)?, command),
        Commands::Resolve { url } => cmd_resolve(&rt, &build_client(cli)?, url),
        Commands::Genres => {
            cmd_genres();
            Ok(())
        }
        Commands::Config(command) => cmd_config(cli, command),
    }
}

/// Print the API host, discovering one if needed
pub fn cmd_host(rt: &Runtime, client: &AudiusClient, refresh: bool) -> anyhow::Result<()> {
    let host = rt.block_on(client.host(refresh))?;
    println!("{}", host);
    Ok(())
}

/// Print the API URL a permalink redirects to
pub fn cmd_resolve(rt: &Runtime, client: &AudiusClient, url: &str) -> anyhow::Result<()> {
    let resolved = rt
        .block_on(client.resolve_url(url))
        .with_context(|| format!("Failed to resolve {}", url))?;
    println!("{}", resolved);
    Ok(())
}

pub fn cmd_genres() {
    for genre in Genre::ALL {
        println!("{}", genre);
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Config file (default or `--config`) with command-line overrides applied
pub(crate) fn effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => crate::config::load_from(path)?,
        None => crate::config::load(),
    };

    if let Some(app_name) = &cli.app_name {
        config.app_name = Some(app_name.clone());
    }
    if let Some(host) = &cli.host {
        config.host = Some(host.clone());
    }

    Ok(config)
}

fn build_client(cli: &Cli) -> anyhow::Result<AudiusClient> {
    let config = effective_config(cli)?;
    AudiusClient::from_config(&config).context("Failed to create Audius client")
}

/// Pretty-print a value as JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
