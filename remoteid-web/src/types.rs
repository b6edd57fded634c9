//! Core types for the RemoteID web interface client
//!
//! This module defines the request/response values exchanged with the device's
//! HTTP endpoints and the error type shared by the whole library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type used throughout the client
pub type Timestamp = DateTime<Utc>;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, WebError>;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Expected body type of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// Body is read as (lossy) UTF-8 text
    #[default]
    Text,
    /// Body is passed through as raw bytes
    ArrayBuffer,
}

/// A completed HTTP exchange
///
/// Any status code counts as a completed load; only transport failures
/// (connection errors, timeouts) are reported as [`TransportError`].
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes
    pub body: Vec<u8>,
    /// When the response finished loading
    pub received_at: Timestamp,
}

impl Response {
    /// Create a response received now
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            received_at: Utc::now(),
        }
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Number of body bytes
    pub fn byte_length(&self) -> usize {
        self.body.len()
    }

    /// True for 2xx status codes
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,
}

/// Errors that can occur while talking to the device
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Cross-origin requests are not supported by this transport: {url}")]
    CorsUnsupported { url: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
