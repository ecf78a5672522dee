//! HTTP transport seam.
//!
//! Everything the client sends goes through [`HttpTransport`], so tests can
//! substitute a mock while production code uses [`ReqwestTransport`].
//!
//! # Example
//!
//! ```ignore
//! use audius_client::transport::{HttpTransport, ReqwestTransport};
//!
//! let transport = ReqwestTransport::new(None)?;
//! let body = transport.get_json("https://api.audius.co", &[]).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};

use crate::error::{Error, Result};

/// Live response body handed to the caller, who owns draining or dropping it.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Query parameters as key/value pairs, in send order.
pub type Query<'a> = [(&'a str, String)];

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The three kinds of GET the client needs.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and decode the body as JSON.
    async fn get_json(&self, url: &str, query: &Query<'_>) -> Result<serde_json::Value>;

    /// GET `url` and return the body as a stream, optionally with a `Range` header.
    async fn get_stream(
        &self,
        url: &str,
        query: &Query<'_>,
        range: Option<&str>,
    ) -> Result<ByteStream>;

    /// GET `url`, follow redirects and return where we ended up.
    async fn get_final_url(&self, url: &str, query: &Query<'_>) -> Result<String>;
}

/// Production transport backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport.
    ///
    /// The client accepts gzip responses and follows redirects with reqwest's
    /// default policy. Without a timeout, requests wait as long as the
    /// connection does.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().gzip(true).user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }

    /// Send the GET and reject non-success statuses.
    async fn send(
        &self,
        url: &str,
        query: &Query<'_>,
        range: Option<&str>,
    ) -> Result<reqwest::Response> {
        tracing::debug!("GET {} ({} query params)", url, query.len());

        let mut request = self.http_client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(range) = range {
            request = request.header(reqwest::header::RANGE, range);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::status(response.url().as_str(), status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: &str, query: &Query<'_>) -> Result<serde_json::Value> {
        let response = self.send(url, query, None).await?;
        Ok(response.json::<serde_json::Value>().await?)
    }

    async fn get_stream(
        &self,
        url: &str,
        query: &Query<'_>,
        range: Option<&str>,
    ) -> Result<ByteStream> {
        let response = self.send(url, query, range).await?;
        Ok(response.bytes_stream().map(|chunk| chunk.map_err(Error::from)).boxed())
    }

    async fn get_final_url(&self, url: &str, query: &Query<'_>) -> Result<String> {
        let response = self.send(url, query, None).await?;
        Ok(response.url().to_string())
    }
}

/// Mock transport for testing.
///
/// Serves canned JSON per URL and records every request it sees.
#[cfg(test)]
pub mod mocks {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;

    /// A request as the mock saw it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub url: String,
        pub query: Vec<(String, String)>,
        pub range: Option<String>,
    }

    impl RecordedRequest {
        /// Value of a query parameter, if it was sent.
        pub fn param(&self, key: &str) -> Option<&str> {
            self.query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }
    }

    /// Mock transport keyed by exact URL (without query string).
    #[derive(Default)]
    pub struct MockTransport {
        routes: Mutex<HashMap<String, Result<serde_json::Value>>>,
        stream_body: Mutex<Vec<Vec<u8>>>,
        redirects: Mutex<HashMap<String, String>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Serve `body` for GETs of `url`.
        pub fn route(&self, url: impl Into<String>, body: serde_json::Value) -> &Self {
            self.routes.lock().insert(url.into(), Ok(body));
            self
        }

        /// Fail GETs of `url` with `error`.
        pub fn fail(&self, url: impl Into<String>, error: Error) -> &Self {
            self.routes.lock().insert(url.into(), Err(error));
            self
        }

        /// Chunks returned by every streaming GET.
        pub fn stream_chunks(&self, chunks: Vec<Vec<u8>>) -> &Self {
            *self.stream_body.lock() = chunks;
            self
        }

        /// Final URL reported when `url` is requested with redirects.
        pub fn redirect(&self, url: impl Into<String>, target: impl Into<String>) -> &Self {
            self.redirects.lock().insert(url.into(), target.into());
            self
        }

        /// Everything requested so far, in order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().clone()
        }

        /// Number of requests made to `url`.
        pub fn count(&self, url: &str) -> usize {
            self.requests.lock().iter().filter(|r| r.url == url).count()
        }

        fn record(&self, url: &str, query: &Query<'_>, range: Option<&str>) {
            self.requests.lock().push(RecordedRequest {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                range: range.map(str::to_string),
            });
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get_json(&self, url: &str, query: &Query<'_>) -> Result<serde_json::Value> {
            self.record(url, query, None);
            self.routes
                .lock()
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(Error::status(url, 404)))
        }

        async fn get_stream(
            &self,
            url: &str,
            query: &Query<'_>,
            range: Option<&str>,
        ) -> Result<ByteStream> {
            self.record(url, query, range);
            let chunks: Vec<Result<Bytes>> = self
                .stream_body
                .lock()
                .iter()
                .map(|c| Ok(Bytes::from(c.clone())))
                .collect();
            Ok(futures::stream::iter(chunks).boxed())
        }

        async fn get_final_url(&self, url: &str, query: &Query<'_>) -> Result<String> {
            self.record(url, query, None);
            self.redirects
                .lock()
                .get(url)
                .cloned()
                .ok_or_else(|| Error::status(url, 404))
        }
    }

    /// Wraps a [`MockTransport`] and tracks how many JSON requests overlap.
    ///
    /// Each request yields to the scheduler a few times before answering, so
    /// concurrently polled requests are all in flight together.
    #[derive(Default)]
    pub struct InFlightTransport {
        pub inner: MockTransport,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl InFlightTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Most JSON requests ever in flight at once.
        pub fn peak(&self) -> usize {
            self.peak.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpTransport for InFlightTransport {
        async fn get_json(&self, url: &str, query: &Query<'_>) -> Result<serde_json::Value> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            let result = self.inner.get_json(url, query).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            result
        }

        async fn get_stream(
            &self,
            url: &str,
            query: &Query<'_>,
            range: Option<&str>,
        ) -> Result<ByteStream> {
            self.inner.get_stream(url, query, range).await
        }

        async fn get_final_url(&self, url: &str, query: &Query<'_>) -> Result<String> {
            self.inner.get_final_url(url, query).await
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_mock_serves_routes_and_records() {
            let mock = MockTransport::new();
            mock.route("https://x.test/a", json!({"data": 1}));

            let body = mock
                .get_json("https://x.test/a", &[("app_name", "t".to_string())])
                .await
                .unwrap();

            assert_eq!(body["data"], 1);
            let requests = mock.requests();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].param("app_name"), Some("t"));
            assert_eq!(mock.count("https://x.test/a"), 1);
        }

        #[tokio::test]
        async fn test_mock_unknown_route_is_404() {
            let mock = MockTransport::new();
            let result = mock.get_json("https://x.test/missing", &[]).await;
            assert!(matches!(result, Err(Error::Status { status: 404, .. })));
        }

        #[tokio::test]
        async fn test_mock_stream() {
            let mock = MockTransport::new();
            mock.stream_chunks(vec![b"ab".to_vec(), b"cd".to_vec()]);

            let stream = mock.get_stream("https://x.test/s", &[], Some("bytes=0-")).await.unwrap();
            let chunks: Vec<_> = stream.collect().await;

            assert_eq!(chunks.len(), 2);
            assert_eq!(mock.requests()[0].range.as_deref(), Some("bytes=0-"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new(None).is_ok());
        assert!(ReqwestTransport::new(Some(Duration::from_secs(5))).is_ok());
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("audius-client/"));
    }
}
