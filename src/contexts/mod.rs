// Context modules for application state management
pub mod catalog;
pub mod error;
pub mod theme;

pub use catalog::*;
pub use error::*;
pub use theme::*;
