//! Audius `/v1` API wire format
//!
//! - `dto` - exact response shapes, never used outside this module's callers
//! - `adapter` - converts DTOs into [`crate::model`] types
//!
//! API docs: https://docs.audius.org/developers/api

pub mod adapter;
pub mod dto;

/// API version path segment
pub const API_VERSION: &str = "v1";
