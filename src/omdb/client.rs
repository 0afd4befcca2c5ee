use std::fmt;
use std::future::Future;

use dioxus::logger::tracing;
use reqwest::{Client, Url};

use super::types::{CatalogResponse, SearchEnvelope};
use crate::contexts::{CatalogConfig, ConfigError, ConfigResult, SearchResult};
use crate::utils::display_utils::redact;

/// Anything that can answer a free-text movie search
pub trait MovieCatalog {
    fn search(&self, term: &str) -> impl Future<Output = SearchResult<CatalogResponse>>;
}

/// OMDb search client sharing one connection pool across clones
#[derive(Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: CatalogConfig) -> ConfigResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }
}

impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}

impl MovieCatalog for OmdbClient {
    async fn search(&self, term: &str) -> SearchResult<CatalogResponse> {
        tracing::debug!("GET {} s={:?}", self.base_url, term);

        let envelope: SearchEnvelope = self
            .http
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.as_str()), ("s", term)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.into())
    }
}
