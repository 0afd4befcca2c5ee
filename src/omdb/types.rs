use serde::Deserialize;

use crate::utils::config;

/// Poster artwork for a single title
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Poster {
    Url(String),
    #[default]
    Placeholder,
}

impl From<String> for Poster {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == config::POSTER_UNAVAILABLE {
            Poster::Placeholder
        } else {
            Poster::Url(raw)
        }
    }
}

impl Poster {
    /// Image source to render for this poster
    pub fn src(&self) -> &str {
        match self {
            Poster::Url(url) => url,
            Poster::Placeholder => config::PLACEHOLDER_POSTER_URL,
        }
    }
}

/// One search hit as returned by the provider. Only the id and title are
/// required; a hit missing the rest still renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: Poster,
}

/// Interpreted answer of a catalog search
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    Found(Vec<MovieSummary>),
    NoMatch { reason: Option<String> },
}

/// Raw search payload. `Response` is the string "True" or "False".
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<MovieSummary>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

impl From<SearchEnvelope> for CatalogResponse {
    fn from(envelope: SearchEnvelope) -> Self {
        if envelope.response.eq_ignore_ascii_case("true") && !envelope.search.is_empty() {
            CatalogResponse::Found(envelope.search)
        } else {
            CatalogResponse::NoMatch {
                reason: envelope.error,
            }
        }
    }
}
