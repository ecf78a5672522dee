//! API host discovery.
//!
//! Audius is served by many interchangeable nodes. The bootstrap directory
//! lists them; we pick one at random and keep using it until someone asks
//! for a refresh. There is no health check: a dead node only shows up as a
//! failed request, and the fix is `resolve(true)`.

use std::sync::Arc;

use parking_lot::RwLock;
use rand::seq::IndexedRandom;

use crate::api::dto;
use crate::error::{Error, Result};
use crate::transport::HttpTransport;

/// Bootstrap directory listing every live API node
pub const DEFAULT_DISCOVERY_URL: &str = "https://api.audius.co";

/// Discovers and caches one API host.
pub struct HostResolver {
    discovery_url: String,
    transport: Arc<dyn HttpTransport>,
    cached: RwLock<Option<String>>,
}

impl HostResolver {
    /// Create a resolver with an empty cache.
    pub fn new(transport: Arc<dyn HttpTransport>, discovery_url: impl Into<String>) -> Self {
        Self {
            discovery_url: discovery_url.into(),
            transport,
            cached: RwLock::new(None),
        }
    }

    /// Create a resolver whose cache already holds `host`.
    ///
    /// Discovery still runs on a forced refresh.
    pub fn with_host(
        transport: Arc<dyn HttpTransport>,
        discovery_url: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        let resolver = Self::new(transport, discovery_url);
        *resolver.cached.write() = Some(normalize(&host.into()));
        resolver
    }

    pub fn discovery_url(&self) -> &str {
        &self.discovery_url
    }

    /// The cached host, without touching the network.
    pub fn cached_host(&self) -> Option<String> {
        self.cached.read().clone()
    }

    /// Return the cached host, or discover a new one.
    ///
    /// Concurrent first calls may each run discovery; the last one to finish wins.
    pub async fn resolve(&self, force_refresh: bool) -> Result<String> {
        if !force_refresh {
            let cached = self.cached_host();
            if let Some(host) = cached {
                tracing::debug!("Using cached API host {}", host);
                return Ok(host);
            }
        }

        let host = self.discover().await?;
        *self.cached.write() = Some(host.clone());
        tracing::info!("Selected API host {}", host);
        Ok(host)
    }

    async fn discover(&self) -> Result<String> {
        let body = self.transport.get_json(&self.discovery_url, &[]).await?;
        let directory: dto::DirectoryResponse = serde_json::from_value(body)?;
        let candidates = directory.data.unwrap_or_default();

        tracing::debug!(
            "Discovery at {} returned {} hosts",
            self.discovery_url,
            candidates.len()
        );

        pick_host(&candidates).ok_or(Error::EmptyDirectory)
    }
}

/// Uniformly random pick among the non-blank candidates.
fn pick_host(candidates: &[String]) -> Option<String> {
    let usable: Vec<&String> = candidates.iter().filter(|h| !h.trim().is_empty()).collect();
    usable.choose(&mut rand::rng()).map(|h| normalize(h))
}

fn normalize(host: &str) -> String {
    host.trim().trim_end_matches('/').to_string()
}
