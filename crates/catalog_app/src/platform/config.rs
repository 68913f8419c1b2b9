//! Optional read-only settings file for the catalog browser.

use std::fs;
use std::path::Path;
use std::time::Duration;

use catalog_core::DEFAULT_ROWS_PER_VIEW;
use catalog_engine::FetchSettings;
use catalog_logging::{catalog_info, catalog_warn};
use serde::Deserialize;

pub const CONFIG_FILENAME: &str = "catalog_browser.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_limit: Option<u32>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub rows_per_view: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            base_url: fetch.base_url,
            page_limit: fetch.page_limit,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_response_bytes: fetch.max_bytes,
            rows_per_view: DEFAULT_ROWS_PER_VIEW,
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            page_limit: self.page_limit,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Reads `path`; `Ok(None)` when the file does not exist.
pub fn load(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(ron::from_str(&content)?))
}

pub fn load_or_default(path: &Path) -> AppConfig {
    match load(path) {
        Ok(Some(config)) => {
            catalog_info!("Loaded config from {:?}", path);
            config
        }
        Ok(None) => AppConfig::default(),
        Err(err) => {
            catalog_warn!("Ignoring config {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
