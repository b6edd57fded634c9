//! Cross-origin request factory
//!
//! Device pages may be served from a different origin than the device's
//! status endpoints, so every request is built for cross-origin use. A
//! transport advertises which flavour of cross-origin request it can issue;
//! when it supports none, no request is created at all.

use crate::types::{HttpMethod, ResponseType};
use std::fmt;
use std::time::Duration;

/// Cross-origin support offered by a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorsCapability {
    /// Modern requests with credential support
    #[default]
    Credentials,
    /// Legacy domain-request fallback (no credentials, no custom headers)
    DomainRequest,
    /// No cross-origin support
    Unsupported,
}

/// Mode a request was created in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsMode {
    Credentials,
    DomainRequest,
}

impl fmt::Display for CorsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorsMode::Credentials => write!(f, "credentials"),
            CorsMode::DomainRequest => write!(f, "domain-request"),
        }
    }
}

/// A single cross-origin request, built per call and never reused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsRequest {
    pub method: HttpMethod,
    pub url: String,
    pub mode: CorsMode,
    /// Request timeout; `None` waits as long as the transport allows
    pub timeout: Option<Duration>,
    pub response_type: ResponseType,
}

impl CorsRequest {
    /// Builder method: set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builder method: set the expected response type
    pub fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }
}

/// Create a request configured for cross-origin use
///
/// Returns `None` when the capability is [`CorsCapability::Unsupported`].
/// No error is raised; callers decide what a missing request means.
pub fn create_cors_request(
    capability: CorsCapability,
    method: HttpMethod,
    url: &str,
) -> Option<CorsRequest> {
    let mode = match capability {
        CorsCapability::Credentials => CorsMode::Credentials,
        CorsCapability::DomainRequest => CorsMode::DomainRequest,
        CorsCapability::Unsupported => {
            log::debug!("No cross-origin support, not creating {} {}", method, url);
            return None;
        }
    };

    Some(CorsRequest {
        method,
        url: url.to_string(),
        mode,
        timeout: None,
        response_type: ResponseType::Text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_request() {
        let request =
            create_cors_request(CorsCapability::Credentials, HttpMethod::Get, "/ajax/status.json")
                .unwrap();
        assert_eq!(request.mode, CorsMode::Credentials);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "/ajax/status.json");
        assert_eq!(request.timeout, None);
        assert_eq!(request.response_type, ResponseType::Text);
    }

    #[test]
    fn test_legacy_fallback() {
        let request =
            create_cors_request(CorsCapability::DomainRequest, HttpMethod::Get, "/").unwrap();
        assert_eq!(request.mode, CorsMode::DomainRequest);
    }

    #[test]
    fn test_unsupported_yields_none() {
        assert!(create_cors_request(CorsCapability::Unsupported, HttpMethod::Get, "/").is_none());
    }

    #[test]
    fn test_builders() {
        let request = create_cors_request(CorsCapability::default(), HttpMethod::Get, "/fw.bin")
            .unwrap()
            .with_timeout(Duration::from_secs(3))
            .with_response_type(ResponseType::ArrayBuffer);
        assert_eq!(request.timeout, Some(Duration::from_secs(3)));
        assert_eq!(request.response_type, ResponseType::ArrayBuffer);
    }
}
