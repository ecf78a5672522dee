//! Playlist commands.

use clap::Subcommand;
use tokio::runtime::Runtime;

use super::print_json;
use crate::client::AudiusClient;

#[derive(Subcommand)]
pub enum PlaylistsCommand {
    /// Search playlists by name
    Search { term: String },
    /// Get a playlist by ID
    Get { id: String },
    /// List the tracks in a playlist
    Tracks { id: String },
}

pub fn cmd_playlists(
    rt: &Runtime,
    client: &AudiusClient,
    command: &PlaylistsCommand,
) -> anyhow::Result<()> {
    rt.block_on(run(client, command))
}

async fn run(client: &AudiusClient, command: &PlaylistsCommand) -> anyhow::Result<()> {
    match command {
        PlaylistsCommand::Search { term } => print_json(&client.search_playlists(term).await?),
        PlaylistsCommand::Get { id } => match client.get_playlist(id).await? {
            Some(playlist) => print_json(&playlist),
            None => anyhow::bail!("No playlist found with ID {}", id),
        },
        PlaylistsCommand::Tracks { id } => print_json(&client.get_playlist_tracks(id).await?),
    }
}
