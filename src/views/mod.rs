//! The views module contains the layout and the routed pages of the app.

mod movies;
pub use movies::MovieSearch;

mod navbar;
pub use navbar::Navbar;
