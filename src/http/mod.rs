//! # HTTP Transport Layer
//!
//! This module defines the seam between the typed services and the
//! network.
//!
//! ## Key Types
//!
//! - [`HttpTransport`]: The trait every transport implements.
//! - [`RestTransport`]: The real `reqwest`-backed transport.
//! - [`mock::MockTransport`]: A scripted transport for tests.
//! - [`TransportError`]: Common failures (non-2xx, network, decode).
//!
//! ## Architecture Note
//! Why a trait instead of calling `reqwest` directly from the services?
//! Every operation in this crate is a single HTTP round-trip; putting
//! the round-trip behind one object-safe trait means the services,
//! form controllers, and navigation shell are all testable against a
//! scripted transport without a server. The real and mock transports
//! share the exact same contract, so a test exercises the same code
//! path as production minus the socket.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

pub mod mock;
pub mod rest;

pub use rest::RestTransport;

/// HTTP verb for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Errors produced by a transport.
///
/// The status and body are carried for debugging only; callers surface
/// their own fixed per-endpoint messages and never show the server's
/// error body to the user.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, refused, reset...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Deserialize(String),

    /// The request payload could not be serialized.
    #[error("Invalid request body: {0}")]
    Serialize(String),
}

/// A single-attempt HTTP round-trip against the API base URL.
///
/// # Contract
/// - `path` is relative to the configured base URL (e.g. `"products"`,
///   `"products/42"`), never absolute.
/// - `body`, when present, is sent as UTF-8 JSON with
///   `Content-Type: application/json`.
/// - Exactly one attempt per call: no retries, no timeout tuning.
/// - An empty success body resolves to [`Value::Null`] (DELETE has no
///   body, and user registration may answer empty).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}
