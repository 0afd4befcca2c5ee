//! Shared building blocks for the search page: the search form, the
//! loading indicator and the result card.

mod loading_spinner;
pub use loading_spinner::LoadingSpinner;

mod movie_card;
pub use movie_card::MovieCard;

mod search_input;
pub use search_input::SearchInput;
