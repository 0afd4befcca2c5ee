/// Configuration constants for the application
pub mod config {
    /// Term searched once when the search page first mounts
    pub const DEFAULT_SEARCH_TERM: &str = "Marvel";

    /// Environment variable holding the OMDb API key
    pub const API_KEY_ENV: &str = "OMDB_API_KEY";

    /// Environment variable overriding the OMDb endpoint
    pub const BASE_URL_ENV: &str = "OMDB_BASE_URL";

    /// OMDb search endpoint used when no override is set
    pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

    /// Sentinel the provider sends when a title has no poster
    pub const POSTER_UNAVAILABLE: &str = "N/A";

    /// Image shown in place of a missing poster
    pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/150";

    pub const NO_MATCH_MESSAGE: &str = "No movies found! Try another search.";
    pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again later.";
}

/// Helpers for rendering provider values
pub mod display_utils {
    /// Mask all but the last four characters of a secret
    pub fn redact(secret: &str) -> String {
        let len = secret.chars().count();
        if len <= 4 {
            return "*".repeat(len);
        }
        let masked = len - 4;
        secret
            .chars()
            .enumerate()
            .map(|(i, c)| if i < masked { '*' } else { c })
            .collect()
    }

    /// Prefix a release year for card display, e.g. "📅 2012"
    pub fn format_year(year: &str) -> String {
        let year = year.trim();
        if year.is_empty() {
            "📅 Unknown".to_string()
        } else {
            format!("📅 {}", year)
        }
    }
}
