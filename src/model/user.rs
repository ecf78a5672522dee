use serde::Serialize;

use super::{Artwork, CoverPhoto};

/// An Audius account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    /// Unique user ID
    pub id: String,
    /// Display name (editable)
    pub name: String,
    /// Permanent handle
    pub handle: String,
    pub bio: Option<String>,
    /// Verified badge
    pub verified: bool,
    pub location: Option<String>,
    /// Number of accounts this user follows
    pub following: u64,
    /// Number of accounts following this user
    pub followers: u64,
    pub album_count: u64,
    pub track_count: u64,
    pub repost_count: u64,
    pub playlist_count: u64,
    /// Profile banner (empty placeholder when unset)
    pub cover_photo: CoverPhoto,
    /// Avatar (empty placeholder when unset)
    pub profile_picture: Artwork,
}
