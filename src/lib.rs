//! Audius Client - A client for the Audius decentralized music API.
//!
//! Searches and fetches users, tracks and playlists, lists trending tracks,
//! streams audio and resolves audius.co permalinks. An API host is picked at
//! random from the discovery directory on first use and cached afterwards.
//!
//! ```ignore
//! use audius_client::AudiusClient;
//!
//! let client = AudiusClient::new("my-app")?;
//! for track in client.get_trending_tracks("week", Some("Electronic")).await? {
//!     println!("{} by {:?}", track.title(), track.user().map(|u| &u.name));
//! }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
#[cfg(test)]
pub mod test_utils;
pub mod transport;

pub use client::{AudiusClient, ClientBuilder};
pub use error::{Error, Result};
pub use model::{
    Artwork, CoverPhoto, Favourite, Genre, Item, Playlist, RemixParent, Track, TrackElement,
    TrendingTime, User,
};
