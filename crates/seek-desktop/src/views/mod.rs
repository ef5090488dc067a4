//! Application views/pages

mod home;
mod search;

pub use home::Home;
pub use search::Search;
