//! Configuration loading and parsing

use anyhow::{Context, Result};
use remoteid_web::{PollConfig, DEFAULT_STATUS_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

fn default_url() -> String {
    DEFAULT_STATUS_URL.to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageConfig {
    /// Element ids present on the page
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub fill: FillMode,
}

/// How polled JSON is written into the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Inner markup, with board-name resolution
    #[default]
    Html,
    /// Form values
    Value,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    config
        .poll
        .validate()
        .with_context(|| format!("Invalid [poll] section in {:?}", path))?;

    Ok(config)
}
