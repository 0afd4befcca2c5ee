use std::fmt;

use reqwest::Url;

use super::error::{ConfigError, ConfigResult};
use crate::omdb::OmdbClient;
use crate::utils::config;
use crate::utils::display_utils::redact;

/// Settings needed to reach the movie catalog
#[derive(Clone, PartialEq)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: Url,
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl CatalogConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(config::API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(config::API_KEY_ENV))?;

        let raw_url = lookup(config::BASE_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());

        let base_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw_url,
                reason: "not an http(s) endpoint".to_string(),
            });
        }

        Ok(Self { api_key, base_url })
    }
}

/// Create the catalog client from the process environment
pub fn create_client_from_env() -> ConfigResult<OmdbClient> {
    let config = CatalogConfig::from_env()?;
    OmdbClient::new(config)
}
