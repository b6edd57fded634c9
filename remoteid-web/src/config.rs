//! Polling configuration types
//!
//! The defaults match the device web pages: one poll per second and a fixed
//! three second request timeout.

use crate::types::{Result, WebError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between two polls of the same endpoint
pub const DEFAULT_REFRESH_MS: u64 = 1000;

/// Default request timeout for polled requests
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Default status endpoint served by the device
pub const DEFAULT_STATUS_URL: &str = "http://192.168.4.1/ajax/status.json";

/// Configuration for a poll chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between the end of one request and the start of the next
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,

    /// Timeout applied to each polled request
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Optional: stop after this many completed loads
    #[serde(default)]
    pub max_polls: Option<u64>,
}

fn default_refresh_ms() -> u64 {
    DEFAULT_REFRESH_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            refresh_ms: DEFAULT_REFRESH_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_polls: None,
        }
    }
}

impl PollConfig {
    /// Create a new poll configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the refresh interval
    pub fn with_refresh_ms(mut self, refresh_ms: u64) -> Self {
        self.refresh_ms = refresh_ms;
        self
    }

    /// Builder method: set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Builder method: cap the number of completed loads
    pub fn with_max_polls(mut self, max_polls: u64) -> Self {
        self.max_polls = Some(max_polls);
        self
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check that the intervals are usable
    pub fn validate(&self) -> Result<()> {
        if self.refresh_ms == 0 {
            return Err(WebError::InvalidConfig(
                "refresh_ms must be greater than zero".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(WebError::InvalidConfig(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_polls == Some(0) {
            return Err(WebError::InvalidConfig(
                "max_polls must be greater than zero when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PollConfig::new();
        assert_eq!(config.refresh_interval(), Duration::from_millis(1000));
        assert_eq!(config.timeout(), Duration::from_millis(3000));
        assert_eq!(config.max_polls, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_poll_config_builder() {
        let config = PollConfig::new()
            .with_refresh_ms(250)
            .with_timeout_ms(500)
            .with_max_polls(3);

        assert_eq!(config.refresh_ms, 250);
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.max_polls, Some(3));
    }

    #[test]
    fn test_validation() {
        assert!(PollConfig::new().with_refresh_ms(0).validate().is_err());
        assert!(PollConfig::new().with_timeout_ms(0).validate().is_err());
        assert!(PollConfig::new().with_max_polls(0).validate().is_err());
        assert!(PollConfig::new().with_max_polls(1).validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: PollConfig = serde_json::from_str(r#"{"refresh_ms": 200}"#).unwrap();
        assert_eq!(config.refresh_ms, 200);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
