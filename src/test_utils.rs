//! Test utilities and fixtures for audius-client tests.
//!
//! Raw JSON fixtures mirror what an API node returns, so the same values
//! drive DTO contract tests, adapter tests and client scenarios.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_client, raw_track, envelope};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (client, mock) = mock_client();
//!     mock.route(format!("{HOST}/v1/tracks/t1"), envelope(raw_track("t1", "u1")));
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use serde_json::{Value, json};

use crate::client::AudiusClient;
use crate::transport::mocks::MockTransport;

/// Host pinned into every [`mock_client`]
pub const HOST: &str = "https://node.test";

/// Discovery URL configured on every [`mock_client`]
pub const DISCOVERY: &str = "https://discovery.test";

/// Creates a client over a fresh mock transport with [`HOST`] already cached.
///
/// No discovery request is made unless a test forces a refresh.
pub fn mock_client() -> (AudiusClient, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::new());
    let client = AudiusClient::builder()
        .app_name("test-app")
        .discovery_url(DISCOVERY)
        .host(HOST)
        .transport(mock.clone())
        .build()
        .expect("Failed to build mock client");
    (client, mock)
}

/// Wrap a payload in the `{ "data": ... }` envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

/// Serve `raw_user(id, name)` at the user endpoint of [`HOST`].
pub fn route_user(mock: &MockTransport, id: &str, name: &str) {
    mock.route(format!("{}/v1/users/{}", HOST, id), envelope(raw_user(id, name)));
}

/// A fully populated user as the API returns it.
///
/// The handle is the lowercased name.
pub fn raw_user(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "handle": name.to_lowercase(),
        "bio": format!("{} makes music", name),
        "is_verified": true,
        "location": "Berlin",
        "followee_count": 45,
        "follower_count": 120,
        "album_count": 1,
        "track_count": 12,
        "repost_count": 3,
        "playlist_count": 2,
        "cover_photo": {
            "640x": format!("https://img.example/{}/640x.jpg", id),
            "2000x": format!("https://img.example/{}/2000x.jpg", id)
        },
        "profile_picture": {
            "150x150": format!("https://img.example/{}/150x150.jpg", id),
            "480x480": format!("https://img.example/{}/480x480.jpg", id),
            "1000x1000": format!("https://img.example/{}/1000x1000.jpg", id)
        }
    })
}

/// A remixed track uploaded by `user_id`.
pub fn raw_track(id: &str, user_id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Track {}", id),
        "artwork": {
            "150x150": format!("https://img.example/{}/150x150.jpg", id),
            "480x480": format!("https://img.example/{}/480x480.jpg", id),
            "1000x1000": format!("https://img.example/{}/1000x1000.jpg", id)
        },
        "description": "late night session",
        "genre": "Lo-Fi",
        "mood": "Peaceful",
        "release_date": "2021-03-01",
        "remix_of": {
            "tracks": [{ "parent_track_id": "p1" }]
        },
        "repost_count": 2,
        "favorite_count": 7,
        "play_count": 1500,
        "tags": "chill,lofi",
        "duration": 215,
        "downloadable": false,
        "user": { "id": user_id }
    })
}

/// An album owned by `user_id`, named "Playlist {id}".
pub fn raw_playlist(id: &str, user_id: &str) -> Value {
    json!({
        "id": id,
        "playlist_name": format!("Playlist {}", id),
        "artwork": null,
        "description": null,
        "is_album": true,
        "repost_count": 4,
        "favorite_count": 9,
        "total_play_count": 3000,
        "user": { "id": user_id }
    })
}
