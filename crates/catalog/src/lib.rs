//! # Catalog Crate
//!
//! This crate loads the movie dataset and holds it in memory.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `MovieId` and the immutable `Catalog`
//! - **loader**: Parse the JSON dataset into a `Catalog`
//! - **index**: Build the identifier index for O(1) lookups
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::loader;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(loader::load_from_file(Path::new("data/movies.json"))?);
//!
//! let movie = catalog.get_movie(1).unwrap();
//! println!("{} ({})", movie.title, movie.year);
//! ```
//!
//! A `Catalog` has no mutators. Once loaded it can be shared across threads
//! with `Arc` and read without locking.

// Public modules
pub mod error;
pub mod types;
pub mod loader;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Movie, MovieId};
