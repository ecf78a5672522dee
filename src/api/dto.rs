//! Audius API Data Transfer Objects
//!
//! These types match what the `/v1` API returns.
//! Only the adapter and the client plumbing touch these types; nothing public
//! returns them.
//!
//! API Reference: https://docs.audius.org/developers/api
//!
//! Every response is wrapped in a `{ "data": ... }` envelope. Counters,
//! flags and names default rather than fail, whether missing or `null`,
//! because nodes on different versions omit different fields and one bad
//! item would otherwise sink the whole batch.

use serde::{Deserialize, Deserializer, Serialize};

/// Read `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `{ "data": ... }` wrapper around every response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// Missing and `null` both read as `None`
    pub data: Option<T>,
}

/// Image set keyed by square size.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtworkDto {
    #[serde(rename = "150x150")]
    pub size_150: Option<String>,
    #[serde(rename = "480x480")]
    pub size_480: Option<String>,
    #[serde(rename = "1000x1000")]
    pub size_1000: Option<String>,
}

/// Banner image set keyed by width.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoverPhotoDto {
    #[serde(rename = "640x")]
    pub size_640: Option<String>,
    #[serde(rename = "2000x")]
    pub size_2000: Option<String>,
}

/// Full user object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDto {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub handle: String,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_verified: bool,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followee_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub follower_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub track_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repost_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playlist_count: u64,
    pub cover_photo: Option<CoverPhotoDto>,
    pub profile_picture: Option<ArtworkDto>,
}

/// Only the ID of an embedded user is read; the full record is fetched separately.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserRef {
    pub id: String,
}

/// Track object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackDto {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub artwork: Option<ArtworkDto>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub release_date: Option<String>,
    /// Kept raw: the degenerate `{"tracks": null}` shape must be told apart
    /// from every other shape, including `{}`.
    pub remix_of: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repost_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub play_count: u64,
    /// Comma-separated tag list
    pub tags: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloadable: bool,
    pub user: Option<UserRef>,
}

/// Entry of a `remix_of.tracks` array.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackElementDto {
    pub parent_track_id: String,
}

/// Playlist object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistDto {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playlist_name: String,
    pub artwork: Option<ArtworkDto>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_album: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repost_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_play_count: u64,
    pub user: Option<UserRef>,
}

/// Favourite object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FavouriteDto {
    pub favorite_item_id: String,
    /// e.g. `SaveType_track`
    pub favorite_type: String,
    pub user_id: String,
}

/// Discovery directory response: a list of node base URLs.
pub type DirectoryResponse = Envelope<Vec<String>>;

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
