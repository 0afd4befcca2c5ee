use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::state::{SearchState, SearchTicket};
use crate::contexts::SearchResult;
use crate::omdb::{CatalogResponse, MovieCatalog};
use crate::utils::config;

/// Somewhere a `SearchState` can be mutated in short, non-overlapping steps
pub trait SearchStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchState) -> R) -> R;
}

impl SearchStore for SearchState {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        f(self)
    }
}

impl SearchStore for Signal<SearchState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        f(&mut self.write())
    }
}

/// Ask the catalog for the ticket's term
pub async fn fetch_ticket<C: MovieCatalog>(
    catalog: &C,
    ticket: &SearchTicket,
) -> SearchResult<CatalogResponse> {
    tracing::info!("Starting movie search for {:?}...", ticket.term);
    catalog.search(&ticket.term).await
}

/// Fetch and resolve a ticket that was already started on `store`
pub async fn finish_search<C: MovieCatalog, S: SearchStore>(
    catalog: &C,
    store: &mut S,
    ticket: SearchTicket,
) {
    let outcome = fetch_ticket(catalog, &ticket).await;
    store.update(|state| state.resolve(&ticket, outcome));
}

/// Run one search to completion. The store is only borrowed for the
/// start and finish steps, never across the request.
pub async fn run_search<C: MovieCatalog, S: SearchStore>(catalog: &C, store: &mut S, term: &str) {
    let ticket = store.update(|state| state.begin(term));
    finish_search(catalog, store, ticket).await;
}

/// The search issued once when the page first appears
pub async fn run_default_search<C: MovieCatalog, S: SearchStore>(catalog: &C, store: &mut S) {
    run_search(catalog, store, config::DEFAULT_SEARCH_TERM).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::SearchError;
    use crate::omdb::{MovieSummary, Poster};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory catalog that records every term it is asked for
    #[derive(Default)]
    struct FakeCatalog {
        answers: HashMap<String, SearchResult<CatalogResponse>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeCatalog {
        fn with(mut self, term: &str, answer: SearchResult<CatalogResponse>) -> Self {
            self.answers.insert(term.to_string(), answer);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl MovieCatalog for FakeCatalog {
        async fn search(&self, term: &str) -> SearchResult<CatalogResponse> {
            self.calls.borrow_mut().push(term.to_string());
            self.answers
                .get(term)
                .cloned()
                .unwrap_or(Err(SearchError::Transport("unreachable".to_string())))
        }
    }

    fn movie(id: &str, title: &str, poster: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: "2012".to_string(),
            poster: Poster::from(poster.to_string()),
        }
    }

    fn submit_search(catalog: &FakeCatalog, state: &mut SearchState, term: &str) {
        if let Some(ticket) = state.submit(term) {
            block_on(finish_search(catalog, state, ticket));
        }
    }

    fn marvel_movies() -> Vec<MovieSummary> {
        vec![
            movie("tt0371746", "Iron Man", "https://img/iron.jpg"),
            movie("tt0848228", "The Avengers", "https://img/avengers.jpg"),
            movie("tt2247732", "Marvel One-Shot: Item 47", "N/A"),
        ]
    }

    #[test]
    fn test_marvel_returns_three_in_order() {
        let catalog =
            FakeCatalog::default().with("Marvel", Ok(CatalogResponse::Found(marvel_movies())));
        let mut state = SearchState::default();

        block_on(run_search(&catalog, &mut state, "Marvel"));

        assert_eq!(state.results(), marvel_movies().as_slice());
        assert_eq!(state.error_message(), None);
        assert!(!state.is_loading());
        assert_eq!(state.results()[2].poster.src(), config::PLACEHOLDER_POSTER_URL);
    }

    #[test]
    fn test_unknown_term_reports_no_match() {
        let catalog = FakeCatalog::default().with(
            "zzzqqq123",
            Ok(CatalogResponse::NoMatch {
                reason: Some("Movie not found!".to_string()),
            }),
        );
        let mut state = SearchState::default();

        block_on(run_search(&catalog, &mut state, "zzzqqq123"));

        assert!(state.results().is_empty());
        assert_eq!(state.error_message(), Some(config::NO_MATCH_MESSAGE));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_rejected_call_reports_failure() {
        let catalog = FakeCatalog::default();
        let mut state = SearchState::default();

        block_on(run_search(&catalog, &mut state, "Marvel"));

        assert!(state.results().is_empty());
        assert_eq!(state.error_message(), Some(config::FETCH_FAILED_MESSAGE));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_blank_submit_issues_no_request() {
        let catalog = FakeCatalog::default();
        let mut state = SearchState::default();

        submit_search(&catalog, &mut state, "   ");

        assert!(catalog.calls().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_default_search_fires_once_for_default_term() {
        let catalog =
            FakeCatalog::default().with("Marvel", Ok(CatalogResponse::Found(marvel_movies())));
        let mut state = SearchState::default();

        block_on(run_default_search(&catalog, &mut state));

        assert_eq!(catalog.calls(), vec![config::DEFAULT_SEARCH_TERM.to_string()]);
        assert_eq!(state.results().len(), 3);
    }

    #[test]
    fn test_repeated_search_is_idempotent() {
        let catalog =
            FakeCatalog::default().with("Marvel", Ok(CatalogResponse::Found(marvel_movies())));
        let mut state = SearchState::default();

        submit_search(&catalog, &mut state, "Marvel");
        let first = (
            state.results().to_vec(),
            state.error_message().map(str::to_string),
            state.is_loading(),
        );

        submit_search(&catalog, &mut state, "Marvel");
        let second = (
            state.results().to_vec(),
            state.error_message().map(str::to_string),
            state.is_loading(),
        );

        assert_eq!(first, second);
        assert_eq!(catalog.calls().len(), 2);
    }
}
