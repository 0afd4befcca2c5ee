use dioxus::prelude::*;

use crate::components::{LoadingSpinner, MovieCard, SearchInput};
use crate::omdb::{MovieCatalog, OmdbClient};
use crate::search::{finish_search, run_default_search, SearchState, SearchStore, SearchView};

const MOVIES_CSS: Asset = asset!("/assets/styling/movies.css");

#[derive(Clone)]
pub(crate) struct MovieFetcher<C> {
    catalog: C,
    state: Signal<SearchState>,
}

impl<C: MovieCatalog + Clone + 'static> MovieFetcher<C> {
    fn fetch_default(&self) {
        let catalog = self.catalog.clone();
        let mut state = self.state;

        spawn(async move {
            run_default_search(&catalog, &mut state).await;
        });
    }

    /// Starts the search before returning, so the page is already loading
    /// when the handler exits. Returns false for a blank term.
    fn submit(&self, term: String) -> bool {
        let mut state = self.state;
        let Some(ticket) = SearchStore::update(&mut state, |s| s.submit(&term)) else {
            return false;
        };

        let catalog = self.catalog.clone();
        spawn(async move {
            finish_search(&catalog, &mut state, ticket).await;
        });
        true
    }
}

/// Search state for a page, with the default search fired on first render
pub(crate) fn use_movie_search<C: MovieCatalog + Clone + 'static>(catalog: C) -> MovieFetcher<C> {
    let state = use_signal(SearchState::default);
    let fetcher = MovieFetcher { catalog, state };

    use_hook(|| fetcher.fetch_default());

    fetcher
}

#[component]
pub fn MovieSearch() -> Element {
    let fetcher = use_movie_search(use_context::<OmdbClient>());
    let mut state = fetcher.state;

    let snapshot = state.read().clone();
    let query = snapshot.query().to_string();

    let body = match snapshot.view() {
        SearchView::Loading => rsx! { LoadingSpinner {} },
        SearchView::Failed(message) => rsx! {
            p { class: "search-error", "{message}" }
        },
        SearchView::Results(movies) => rsx! {
            div { class: "movies-grid",
                {movies.iter().enumerate().map(|(index, movie)| {
                    rsx! {
                        MovieCard {
                            key: "{index}-{movie.id}",
                            movie: movie.clone(),
                            index
                        }
                    }
                })}
            }
        },
        SearchView::Idle => rsx! {},
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MOVIES_CSS }
        div { class: "movies-container",
            SearchInput {
                query,
                on_change: move |q: String| state.write().set_query(q),
                on_submit: move |term: String| {
                    fetcher.submit(term);
                }
            }
            {body}
        }
    }
}
