use dioxus::logger::tracing;

use crate::contexts::{SearchError, SearchResult};
use crate::omdb::{CatalogResponse, MovieSummary};

/// Handle for one in-flight search. Only the most recently issued ticket
/// may resolve into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    id: u64,
    pub term: String,
}

/// What the page should show for the current state
#[derive(Debug, PartialEq)]
pub enum SearchView<'a> {
    Idle,
    Loading,
    Failed(&'a str),
    Results(&'a [MovieSummary]),
}

/// Everything the search page renders from.
///
/// `results` and `error_message` are never both populated, and
/// `is_loading` stays set until the latest ticket resolves.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    results: Vec<MovieSummary>,
    is_loading: bool,
    error_message: Option<String>,
    latest_ticket: u64,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search for `term`, superseding any search still in flight
    pub fn begin(&mut self, term: &str) -> SearchTicket {
        self.latest_ticket += 1;
        self.is_loading = true;
        self.error_message = None;
        self.results.clear();

        SearchTicket {
            id: self.latest_ticket,
            term: term.to_string(),
        }
    }

    /// Form submission: blank terms are ignored and issue no request
    pub fn submit(&mut self, term: &str) -> Option<SearchTicket> {
        if term.trim().is_empty() {
            return None;
        }
        Some(self.begin(term))
    }

    /// Apply the outcome of `ticket`. Returns false when the ticket was
    /// superseded and the outcome was dropped.
    pub fn resolve(&mut self, ticket: &SearchTicket, outcome: SearchResult<CatalogResponse>) -> bool {
        if ticket.id != self.latest_ticket {
            tracing::debug!(
                "Dropping stale response for {:?} (ticket {}, latest {})",
                ticket.term,
                ticket.id,
                self.latest_ticket
            );
            return false;
        }

        match outcome {
            Ok(CatalogResponse::Found(movies)) if !movies.is_empty() => {
                tracing::info!("Search {:?} returned {} movies", ticket.term, movies.len());
                self.results = movies;
                self.error_message = None;
            }
            Ok(CatalogResponse::Found(_)) => {
                self.fail(SearchError::NoMatchFound);
            }
            Ok(CatalogResponse::NoMatch { reason }) => {
                tracing::warn!(
                    "No movies for {:?}: {}",
                    ticket.term,
                    reason.as_deref().unwrap_or("no reason given")
                );
                self.fail(SearchError::NoMatchFound);
            }
            Err(err) => {
                tracing::error!("Failed to fetch movies for {:?}: {}", ticket.term, err);
                self.fail(err);
            }
        }

        self.is_loading = false;
        true
    }

    fn fail(&mut self, err: SearchError) {
        self.results.clear();
        self.error_message = Some(err.user_message().to_string());
    }

    pub fn view(&self) -> SearchView<'_> {
        if self.is_loading() {
            SearchView::Loading
        } else if let Some(message) = self.error_message() {
            SearchView::Failed(message)
        } else if !self.results().is_empty() {
            SearchView::Results(self.results())
        } else {
            SearchView::Idle
        }
    }
}
