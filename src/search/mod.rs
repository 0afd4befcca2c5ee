//! Search state and the operations that drive it against a catalog.

pub mod runner;
pub mod state;

pub use runner::*;
pub use state::*;
