//! Core domain types for the movie catalog.
//!
//! This module defines the record type and the immutable [`Catalog`] that
//! owns every record in dataset order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie.
///
/// Signed so that zero and negative values can reach the lookup guard instead
/// of being rejected at parse time. Dataset identifiers are positive.
pub type MovieId = i64;

// =============================================================================
// Movie
// =============================================================================

/// A single movie from the dataset.
///
/// The serde renames are the on-disk field names and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub title: String,
    pub director: String,
    pub year: i32,
    /// Single genre label, e.g. "Sci-Fi"
    pub genre: String,
    pub description: String,
    /// Runtime in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Conventionally between 0.0 and 10.0
    #[serde(rename = "imdbRating")]
    pub imdb_rating: f64,
}

// =============================================================================
// Catalog - The Immutable In-Memory Collection
// =============================================================================

/// Every movie in canonical (dataset) order plus an identifier index.
///
/// The catalog has no mutators: it is built once and then shared, usually
/// behind an `Arc`, by any number of readers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Canonical order, the only owner of the records
    pub(crate) movies: Vec<Movie>,
    /// Position of each identifier in `movies`
    ///
    /// For duplicate identifiers the last occurrence wins.
    pub(crate) index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Build a catalog from movies in canonical order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let index = crate::index::build_id_index(&movies);
        Self { movies, index }
    }

    /// A catalog with zero records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact identifier lookup through the index.
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.index.get(&id).map(|&position| &self.movies[position])
    }

    /// All movies in canonical order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Number of distinct identifiers in the index.
    ///
    /// Smaller than [`len`](Self::len) only when the dataset repeats an id.
    pub fn indexed_count(&self) -> usize {
        self.index.len()
    }
}
