//! Browser crate for the Reel Catalog application.
//!
//! This crate sits between the query engine and whatever renders pages:
//! it builds view models, attaches reviews and picks the themed messages.

pub mod movie_browser;
pub mod fallback;
pub mod messages;
pub mod reviews;
pub mod views;

pub use movie_browser::MovieBrowser;
pub use fallback::{catalog_or_empty, load_catalog_or_empty};
pub use reviews::{InMemoryReviews, Review, ReviewLoadError, ReviewSource};
pub use views::{DetailsOutcome, DetailsView, MovieListView, SearchView};
