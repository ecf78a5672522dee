//! Audius API client
//!
//! [`AudiusClient`] is the public entry point: one method per remote
//! operation. Each call validates its arguments, resolves an API host
//! (cached after the first call), sends one GET and maps the `data`
//! envelope into [`crate::model`] types.
//!
//! Tracks and playlists only embed their uploader's ID, so list calls run a
//! second round of user lookups. Those run concurrently (bounded by
//! `max_concurrent_lookups`), each distinct uploader is fetched once per
//! call, and a single failed lookup fails the whole call. An uploader the API
//! reports missing (404) just leaves `user` unset.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::api::{API_VERSION, adapter, dto};
use crate::config::{Config, DEFAULT_MAX_CONCURRENT_LOOKUPS};
use crate::discovery::{DEFAULT_DISCOVERY_URL, HostResolver};
use crate::error::{Error, Result, require};
use crate::model::{Favourite, Playlist, Track, TrendingTime, User};
use crate::transport::{ByteStream, HttpTransport, ReqwestTransport};

/// Range header sent when a full download is requested
const DOWNLOAD_RANGE: &str = "bytes=0-";

/// Audius API client.
///
/// Cheap to clone; clones share the cached host.
#[derive(Clone)]
pub struct AudiusClient {
    app_name: String,
    resolver: Arc<HostResolver>,
    transport: Arc<dyn HttpTransport>,
    max_concurrent_lookups: usize,
}

/// Builder for [`AudiusClient`].
pub struct ClientBuilder {
    app_name: Option<String>,
    discovery_url: String,
    host: Option<String>,
    max_concurrent_lookups: usize,
    request_timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            app_name: None,
            discovery_url: DEFAULT_DISCOVERY_URL.to_string(),
            host: None,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
            request_timeout: None,
            transport: None,
        }
    }
}

impl ClientBuilder {
    /// Name sent as `app_name` with every request.
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn discovery_url(mut self, url: impl Into<String>) -> Self {
        self.discovery_url = url.into();
        self
    }

    /// Skip discovery and use this host until a forced refresh.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn max_concurrent_lookups(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = limit;
        self
    }

    /// Timeout applied to the default reqwest transport.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Use a custom transport instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<AudiusClient> {
        if self.host.is_none() && self.discovery_url.trim().is_empty() {
            return Err(Error::config("discovery_url is empty and no host is pinned"));
        }

        let app_name = self.app_name.unwrap_or_default();
        if app_name.is_empty() {
            tracing::warn!(
                "In the future, please provide a name for your Audius app! (This can be anything!)"
            );
        }

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.request_timeout)?),
        };

        let resolver = match self.host {
            Some(host) => HostResolver::with_host(transport.clone(), self.discovery_url, host),
            None => HostResolver::new(transport.clone(), self.discovery_url),
        };

        Ok(AudiusClient {
            app_name,
            resolver: Arc::new(resolver),
            transport,
            max_concurrent_lookups: self.max_concurrent_lookups.max(1),
        })
    }
}

impl AudiusClient {
    /// Create a client with default settings.
    pub fn new(app_name: impl Into<String>) -> Result<Self> {
        Self::builder().app_name(app_name).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Self::builder()
            .discovery_url(config.discovery_url.clone())
            .max_concurrent_lookups(config.max_concurrent_lookups);

        if let Some(app_name) = &config.app_name {
            builder = builder.app_name(app_name.clone());
        }
        if let Some(host) = &config.host {
            builder = builder.host(host.clone());
        }
        if let Some(timeout) = config.request_timeout() {
            builder = builder.request_timeout(timeout);
        }

        builder.build()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The API host in use, discovering one if needed.
    pub async fn host(&self, force_refresh: bool) -> Result<String> {
        self.resolver.resolve(force_refresh).await
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    /// Search users by name or handle.
    pub async fn search_users(&self, term: &str) -> Result<Vec<User>> {
        let term = require(term, "search_users", "user search term")?;
        let users: Vec<dto::UserDto> = self
            .fetch_list("users/search", &[("query", term.to_string())])
            .await?;
        Ok(users.into_iter().map(adapter::to_user).collect())
    }

    /// Get a user by ID. `None` when the API has no such user (null data or 404).
    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let id = require(id, "get_user", "user ID")?;
        let user: Option<dto::UserDto> = self
            .fetch_item(&format!("users/{}", encode(id)), &[])
            .await?;
        Ok(user.map(adapter::to_user))
    }

    /// Everything a user has favourited.
    pub async fn get_user_favourites(&self, id: &str) -> Result<Vec<Favourite>> {
        let id = require(id, "get_user_favourites", "user ID")?;
        let favourites: Vec<dto::FavouriteDto> = self
            .fetch_list(&format!("users/{}/favorites", encode(id)), &[])
            .await?;
        Ok(favourites.into_iter().map(adapter::to_favourite).collect())
    }

    /// Tracks uploaded by a user.
    pub async fn get_user_tracks(&self, id: &str) -> Result<Vec<Track>> {
        let id = require(id, "get_user_tracks", "user ID")?;
        let tracks = self
            .fetch_list(&format!("users/{}/tracks", encode(id)), &[])
            .await?;
        self.tracks_with_uploaders(tracks).await
    }

    // ------------------------------------------------------------------------
    // Tracks
    // ------------------------------------------------------------------------

    pub async fn search_tracks(&self, term: &str) -> Result<Vec<Track>> {
        let term = require(term, "search_tracks", "track search term")?;
        let tracks = self
            .fetch_list("tracks/search", &[("query", term.to_string())])
            .await?;
        self.tracks_with_uploaders(tracks).await
    }

    /// Get a track by ID. `None` when the API has no such track.
    pub async fn get_track(&self, id: &str) -> Result<Option<Track>> {
        let id = require(id, "get_track", "track ID")?;
        let track: Option<dto::TrackDto> = self
            .fetch_item(&format!("tracks/{}", encode(id)), &[])
            .await?;

        match track {
            Some(track) => Ok(self.tracks_with_uploaders(vec![track]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Top trending tracks.
    ///
    /// `time` is one of `week`, `month` or `allTime`; anything else silently
    /// becomes the default window. `genre` is passed through unchecked.
    pub async fn get_trending_tracks(&self, time: &str, genre: Option<&str>) -> Result<Vec<Track>> {
        let mut params = vec![("time", TrendingTime::parse_lossy(time).as_str().to_string())];
        if let Some(genre) = genre {
            params.push(("genre", genre.to_string()));
        }

        let tracks = self.fetch_list("tracks/trending", &params).await?;
        self.tracks_with_uploaders(tracks).await
    }

    /// Open the audio stream for a track.
    ///
    /// With `download`, the request asks for the whole file from byte zero.
    /// The caller owns the returned stream and must drain or drop it.
    pub async fn stream_track(&self, id: &str, download: bool) -> Result<ByteStream> {
        let id = require(id, "stream_track", "track ID")?;
        let url = self.url(&format!("tracks/{}/stream", encode(id))).await?;
        let range = download.then_some(DOWNLOAD_RANGE);
        self.transport.get_stream(&url, &self.query(&[]), range).await
    }

    // ------------------------------------------------------------------------
    // Playlists
    // ------------------------------------------------------------------------

    pub async fn search_playlists(&self, term: &str) -> Result<Vec<Playlist>> {
        let term = require(term, "search_playlists", "playlist search term")?;
        let playlists = self
            .fetch_list("playlists/search", &[("query", term.to_string())])
            .await?;
        self.playlists_with_uploaders(playlists).await
    }

    /// Get a playlist by ID.
    ///
    /// The API answers with a one-element array; an empty array or a 404 is `None`.
    pub async fn get_playlist(&self, id: &str) -> Result<Option<Playlist>> {
        let id = require(id, "get_playlist", "playlist ID")?;
        let playlists: Vec<dto::PlaylistDto> = self
            .fetch_item(&format!("playlists/{}", encode(id)), &[])
            .await?
            .unwrap_or_default();

        match playlists.into_iter().next() {
            Some(playlist) => Ok(self.playlists_with_uploaders(vec![playlist]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get_playlist_tracks(&self, id: &str) -> Result<Vec<Track>> {
        let id = require(id, "get_playlist_tracks", "playlist ID")?;
        let tracks = self
            .fetch_list(&format!("playlists/{}/tracks", encode(id)), &[])
            .await?;
        self.tracks_with_uploaders(tracks).await
    }

    // ------------------------------------------------------------------------
    // Misc
    // ------------------------------------------------------------------------

    /// Resolve an audius.co permalink to its API URL by following redirects.
    pub async fn resolve_url(&self, url: &str) -> Result<String> {
        let target = require(url, "resolve_url", "URL")?;
        let endpoint = self.url("resolve").await?;
        self.transport
            .get_final_url(&endpoint, &self.query(&[("url", target.to_string())]))
            .await
    }

    // ------------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------------

    async fn url(&self, path: &str) -> Result<String> {
        let host = self.resolver.resolve(false).await?;
        Ok(format!("{}/{}/{}", host, API_VERSION, path))
    }

    /// `app_name` first, then the call's own parameters.
    fn query(&self, params: &[(&'static str, String)]) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(params.len() + 1);
        query.push(("app_name", self.app_name.clone()));
        query.extend(params.iter().cloned());
        query
    }

    /// GET a resource and unwrap its `data` envelope.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Option<T>> {
        let url = self.url(path).await?;
        let body = self.transport.get_json(&url, &self.query(params)).await?;
        let envelope: dto::Envelope<T> = serde_json::from_value(body)?;
        Ok(envelope.data)
    }

    /// Like [`Self::fetch`] for a by-ID lookup: a 404 means the resource is absent.
    async fn fetch_item<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Option<T>> {
        match self.fetch(path, params).await {
            Err(err) if err.is_not_found() => {
                tracing::debug!("{} not found", path);
                Ok(None)
            }
            other => other,
        }
    }

    /// Like [`Self::fetch`], treating missing data as an empty list.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Vec<T>> {
        Ok(self.fetch::<Vec<T>>(path, params).await?.unwrap_or_default())
    }

    async fn tracks_with_uploaders(&self, tracks: Vec<dto::TrackDto>) -> Result<Vec<Track>> {
        self.with_uploaders(tracks, |t| t.user.as_ref(), adapter::to_track)
            .await
    }

    async fn playlists_with_uploaders(
        &self,
        playlists: Vec<dto::PlaylistDto>,
    ) -> Result<Vec<Playlist>> {
        self.with_uploaders(playlists, |p| p.user.as_ref(), adapter::to_playlist)
            .await
    }

    /// Look up every distinct uploader once, then build each item with its
    /// uploader matched by ID.
    async fn with_uploaders<D, T>(
        &self,
        raw: Vec<D>,
        uploader: impl Fn(&D) -> Option<&dto::UserRef>,
        build: impl Fn(D, Option<User>) -> T,
    ) -> Result<Vec<T>> {
        let ids: Vec<String> = {
            let mut seen = HashSet::new();
            raw.iter()
                .filter_map(|item| uploader(item))
                .filter(|user| seen.insert(user.id.as_str()))
                .map(|user| user.id.clone())
                .collect()
        };

        let users = self.lookup_users(ids).await?;

        Ok(raw
            .into_iter()
            .map(|item| {
                let user = uploader(&item).and_then(|u| users.get(&u.id).cloned().flatten());
                build(item, user)
            })
            .collect())
    }

    async fn lookup_users(&self, ids: Vec<String>) -> Result<HashMap<String, Option<User>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        tracing::debug!(
            "Resolving {} uploaders ({} at a time)",
            ids.len(),
            self.max_concurrent_lookups
        );

        stream::iter(ids)
            .map(|id| async move {
                let user = self.get_user(&id).await?;
                Ok::<_, Error>((id, user))
            })
            .buffer_unordered(self.max_concurrent_lookups)
            .try_collect()
            .await
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
