use serde::Serialize;

use super::{Artwork, User};

/// Fields shared by every piece of user-generated content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    /// Artwork (empty placeholder when unset)
    pub artwork: Artwork,
    pub description: Option<String>,
    /// Unique ID
    pub id: String,
    /// Track title or playlist name
    pub title: String,
    pub repost_count: u64,
    pub favourite_count: u64,
    /// Uploader, resolved with a separate user lookup
    pub user: Option<User>,
}

/// A single uploaded track.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    #[serde(flatten)]
    pub item: Item,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub release_date: Option<String>,
    /// Tracks this one remixes, if any
    pub remix_of: Option<RemixParent>,
    pub play_count: u64,
    /// Never null; empty when the track has no tags
    pub tags: Vec<String>,
    /// Length in seconds
    pub duration: u64,
    pub downloadable: bool,
}

/// A playlist or album.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Playlist {
    #[serde(flatten)]
    pub item: Item,
    pub is_album: bool,
    /// Plays summed over every track in the playlist
    pub total_play_count: u64,
}

/// The set of tracks a remix is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemixParent {
    pub tracks: Vec<TrackElement>,
}

/// Reference to a parent track by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackElement {
    pub parent_track_id: String,
}

impl Track {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }

    pub fn user(&self) -> Option<&User> {
        self.item.user.as_ref()
    }
}

impl Playlist {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn name(&self) -> &str {
        &self.item.title
    }

    pub fn user(&self) -> Option<&User> {
        self.item.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_flattens_item_fields() {
        let track = Track {
            item: Item {
                id: "t1".to_string(),
                title: "Song".to_string(),
                ..Default::default()
            },
            tags: vec!["lofi".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["title"], "Song");
        assert_eq!(json["tags"][0], "lofi");
        assert!(json["remix_of"].is_null());
        assert!(json.get("item").is_none());
    }

    #[test]
    fn test_accessors() {
        let playlist = Playlist {
            item: Item {
                id: "p1".to_string(),
                title: "Mix".to_string(),
                user: Some(User {
                    id: "u1".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            is_album: true,
            total_play_count: 10,
        };
        assert_eq!(playlist.id(), "p1");
        assert_eq!(playlist.name(), "Mix");
        assert_eq!(playlist.user().map(|u| u.id.as_str()), Some("u1"));
    }
}
