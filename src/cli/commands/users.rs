//! User commands.

use clap::Subcommand;
use tokio::runtime::Runtime;

use super::print_json;
use crate::client::AudiusClient;

#[derive(Subcommand)]
pub enum UsersCommand {
    /// Search users by name or handle
    Search { term: String },
    /// Get a user by ID
    Get { id: String },
    /// List everything a user has favourited
    Favourites { id: String },
    /// List tracks uploaded by a user
    Tracks { id: String },
}

pub fn cmd_users(rt: &Runtime, client: &AudiusClient, command: &UsersCommand) -> anyhow::Result<()> {
    rt.block_on(run(client, command))
}

async fn run(client: &AudiusClient, command: &UsersCommand) -> anyhow::Result<()> {
    match command {
        UsersCommand::Search { term } => print_json(&client.search_users(term).await?),
        UsersCommand::Get { id } => match client.get_user(id).await? {
            Some(user) => print_json(&user),
            None => anyhow::bail!("No user found with ID {}", id),
        },
        UsersCommand::Favourites { id } => print_json(&client.get_user_favourites(id).await?),
        UsersCommand::Tracks { id } => print_json(&client.get_user_tracks(id).await?),
    }
}
