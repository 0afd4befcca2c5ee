use thiserror::Error;

use crate::utils::config;

/// Errors raised while building the catalog client at startup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The API key variable is unset or blank
    #[error("missing OMDb API key: set {0}")]
    MissingApiKey(&'static str),
    /// The endpoint override is not a valid URL
    #[error("invalid catalog base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The HTTP client could not be constructed
    #[error("HTTP client creation failed: {0}")]
    HttpClient(String),
}

/// Terminal outcomes of a single search that did not produce results
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The provider answered but matched nothing
    #[error("no movies matched the search term")]
    NoMatchFound,
    /// The request never produced a usable response
    #[error("catalog request failed: {0}")]
    Transport(String),
}

impl SearchError {
    /// The fixed message shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::NoMatchFound => config::NO_MATCH_MESSAGE,
            SearchError::Transport(_) => config::FETCH_FAILED_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    /// The request URL carries the API key, so it is stripped before the
    /// message is kept or logged.
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.without_url().to_string())
    }
}

/// Result type for startup configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for catalog searches
pub type SearchResult<T> = Result<T, SearchError>;
