pub mod catalog;
pub mod jikan;
pub mod tmdb;
pub mod types;

pub use catalog::Catalog;
pub use types::{KindSelector, SearchResult};
