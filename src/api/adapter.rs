//! Adapter layer: Convert Audius DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If the API changes its response format, only this file and dto.rs need
//! to change.

use super::dto;
use crate::model::{
    Artwork, CoverPhoto, Favourite, Item, Playlist, RemixParent, Track, TrackElement, User,
};

/// Convert an optional image set, falling back to the empty placeholder.
pub fn to_artwork(artwork: Option<dto::ArtworkDto>) -> Artwork {
    artwork
        .map(|a| Artwork::new(a.size_150, a.size_480, a.size_1000))
        .unwrap_or_default()
}

/// Convert an optional banner set, falling back to the empty placeholder.
pub fn to_cover_photo(cover: Option<dto::CoverPhotoDto>) -> CoverPhoto {
    cover
        .map(|c| CoverPhoto::new(c.size_640, c.size_2000))
        .unwrap_or_default()
}

pub fn to_user(user: dto::UserDto) -> User {
    User {
        id: user.id,
        name: user.name,
        handle: user.handle,
        bio: user.bio,
        verified: user.is_verified,
        location: user.location,
        following: user.followee_count,
        followers: user.follower_count,
        album_count: user.album_count,
        track_count: user.track_count,
        repost_count: user.repost_count,
        playlist_count: user.playlist_count,
        cover_photo: to_cover_photo(user.cover_photo),
        profile_picture: to_artwork(user.profile_picture),
    }
}

pub fn to_favourite(favourite: dto::FavouriteDto) -> Favourite {
    Favourite::from_raw_type(
        favourite.favorite_item_id,
        &favourite.favorite_type,
        favourite.user_id,
    )
}

/// Convert a track, attaching its already-resolved uploader.
pub fn to_track(track: dto::TrackDto, user: Option<User>) -> Track {
    Track {
        item: Item {
            artwork: to_artwork(track.artwork),
            description: track.description,
            id: track.id,
            title: track.title,
            repost_count: track.repost_count,
            favourite_count: track.favorite_count,
            user,
        },
        genre: track.genre,
        mood: track.mood,
        release_date: track.release_date,
        remix_of: to_remix_parent(track.remix_of),
        play_count: track.play_count,
        tags: split_tags(track.tags.as_deref()),
        duration: track.duration,
        downloadable: track.downloadable,
    }
}

/// Convert a playlist, attaching its already-resolved uploader.
pub fn to_playlist(playlist: dto::PlaylistDto, user: Option<User>) -> Playlist {
    Playlist {
        item: Item {
            artwork: to_artwork(playlist.artwork),
            description: playlist.description,
            id: playlist.id,
            title: playlist.playlist_name,
            repost_count: playlist.repost_count,
            favourite_count: playlist.favorite_count,
            user,
        },
        is_album: playlist.is_album,
        total_play_count: playlist.total_play_count,
    }
}

/// `None` for a missing payload and for exactly `{"tracks": null}`.
///
/// Any other object is wrapped, even one with no usable parents.
pub fn to_remix_parent(raw: Option<serde_json::Value>) -> Option<RemixParent> {
    let raw = raw?;
    if is_degenerate_remix(&raw) {
        return None;
    }

    let tracks = raw
        .get("tracks")
        .and_then(|t| t.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    serde_json::from_value::<dto::TrackElementDto>(entry.clone()).ok()
                })
                .map(|e| TrackElement {
                    parent_track_id: e.parent_track_id,
                })
                .collect()
        })
        .unwrap_or_default();

    Some(RemixParent { tracks })
}

fn is_degenerate_remix(raw: &serde_json::Value) -> bool {
    match raw.as_object() {
        Some(obj) => obj.len() == 1 && obj.get("tracks").is_some_and(|t| t.is_null()),
        None => false,
    }
}

/// Split the comma-separated tag string; absent or empty gives no tags.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(tags) if !tags.is_empty() => tags.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}
