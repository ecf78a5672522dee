//! Track commands, including streaming audio to a file or stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use futures::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::runtime::Runtime;

use super::print_json;
use crate::client::AudiusClient;
use crate::model::Genre;
use crate::transport::ByteStream;

#[derive(Subcommand)]
pub enum TracksCommand {
    /// Search tracks by title
    Search { term: String },
    /// Get a track by ID
    Get { id: String },
    /// List trending tracks
    Trending {
        /// Time window: week, month or allTime
        #[arg(long, default_value = "week")]
        time: String,
        /// Only tracks in this genre (see `audius genres`)
        #[arg(long)]
        genre: Option<String>,
    },
    /// Stream a track's audio
    Stream {
        id: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Request the complete file from the first byte
        #[arg(long)]
        download: bool,
    },
}

pub fn cmd_tracks(rt: &Runtime, client: &AudiusClient, command: &TracksCommand) -> anyhow::Result<()> {
    rt.block_on(run(client, command))
}

async fn run(client: &AudiusClient, command: &TracksCommand) -> anyhow::Result<()> {
    match command {
        TracksCommand::Search { term } => print_json(&client.search_tracks(term).await?),
        TracksCommand::Get { id } => match client.get_track(id).await? {
            Some(track) => print_json(&track),
            None => anyhow::bail!("No track found with ID {}", id),
        },
        TracksCommand::Trending { time, genre } => {
            if let Some(genre) = genre {
                warn_unknown_genre(genre);
            }
            print_json(&client.get_trending_tracks(time, genre.as_deref()).await?)
        }
        TracksCommand::Stream {
            id,
            output,
            download,
        } => {
            let mut stream = client.stream_track(id, *download).await?;

            let written = match output {
                Some(path) => {
                    let mut file = tokio::fs::File::create(path)
                        .await
                        .with_context(|| format!("Failed to create {:?}", path))?;
                    copy_stream(&mut stream, &mut file).await?
                }
                None => copy_stream(&mut stream, &mut tokio::io::stdout()).await?,
            };

            tracing::info!("Wrote {} bytes for track {}", written, id);
            Ok(())
        }
    }
}

/// The API ignores genres it doesn't know, which usually means a typo.
fn warn_unknown_genre(genre: &str) {
    if Genre::from_name(genre).is_none() {
        tracing::warn!(
            "'{}' is not a known genre; trending results may be empty",
            genre
        );
    }
}

/// Drain `stream` into `writer`, returning the number of bytes written.
async fn copy_stream<W>(stream: &mut ByteStream, writer: &mut W) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut total = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await?;
        total += chunk.len() as u64;
    }
    writer.flush().await?;
    Ok(total)
}
