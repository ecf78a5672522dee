//! Crate-wide error types.
//!
//! Every fallible operation in the library returns [`Result`]. The CLI
//! binary wraps these in `anyhow` for convenient propagation.
//!
//! # Design
//!
//! - [`Error::InvalidArgument`] is raised before any network traffic
//! - Transport, status and decoding failures are surfaced unchanged
//! - Resources that simply don't exist are `Ok(None)`, not errors
//!
//! # Example
//!
//! ```ignore
//! use audius_client::{AudiusClient, Error};
//!
//! match client.get_track("").await {
//!     Err(Error::InvalidArgument { operation, .. }) => eprintln!("{operation}: bad input"),
//!     other => println!("{other:?}"),
//! }
//! ```

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A required identifier or search term was empty
    #[error("{operation}() expected {expected}, but got none")]
    InvalidArgument {
        operation: &'static str,
        expected: &'static str,
    },

    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body wasn't the JSON shape we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The discovery directory returned no usable hosts
    #[error("Couldn't get an API endpoint to use: the discovery directory returned no hosts")]
    EmptyDirectory,

    /// The client was built with unusable settings (no discovery URL and no pinned host)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid-argument error.
    pub fn invalid_argument(operation: &'static str, expected: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            expected,
        }
    }

    /// Create a status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error was raised locally, before any request was sent.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether the server answered 404, which the API uses for a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Error::Parse(err.to_string());
        }
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => Error::status(url.as_str(), status.as_u16()),
            _ => Error::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Reject an empty argument before anything touches the network.
pub(crate) fn require<'a>(
    value: &'a str,
    operation: &'static str,
    expected: &'static str,
) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::invalid_argument(operation, expected))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("get_user", "user ID");
        assert_eq!(err.to_string(), "get_user() expected user ID, but got none");
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_status_display() {
        let err = Error::status("https://node.example/v1/users/x", 503);
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("node.example"));
        assert!(!err.is_argument_error());
    }

    #[test]
    fn test_not_found() {
        assert!(Error::status("https://node.example/v1/users/x", 404).is_not_found());
        assert!(!Error::status("https://node.example/v1/users/x", 500).is_not_found());
        assert!(!Error::Network("reset".to_string()).is_not_found());
    }

    #[test]
    fn test_require() {
        assert_eq!(require("abc", "op", "thing").unwrap(), "abc");
        assert!(matches!(
            require("", "op", "thing"),
            Err(Error::InvalidArgument { operation: "op", .. })
        ));
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
