//! HTTP transports
//!
//! The [`Transport`] trait is the seam between the polling logic and the
//! network. [`HttpTransport`] talks to a real device; tests plug in scripted
//! transports instead.

use crate::request::{CorsCapability, CorsRequest};
use crate::types::{HttpMethod, Response, Result, TransportError, WebError};
use chrono::Utc;

/// Something that can carry a [`CorsRequest`] to the device
pub trait Transport {
    /// Which cross-origin requests this transport can issue
    fn capability(&self) -> CorsCapability {
        CorsCapability::Credentials
    }

    /// Send the request and wait for it to finish loading
    ///
    /// Every HTTP status is a completed load. Only failures below HTTP are
    /// errors.
    fn send(&self, request: &CorsRequest) -> std::result::Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn capability(&self) -> CorsCapability {
        (**self).capability()
    }

    fn send(&self, request: &CorsRequest) -> std::result::Result<Response, TransportError> {
        (**self).send(request)
    }
}

/// Blocking HTTP transport backed by `reqwest`
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh HTTP client
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("remoteid-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WebError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &CorsRequest) -> std::result::Result<Response, TransportError> {
        log::trace!("{} {} ({} mode)", request.method, request.url, request.mode);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(map_reqwest_error)?;

        Ok(Response {
            status,
            body: body.to_vec(),
            received_at: Utc::now(),
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(e.to_string())
    }
}
