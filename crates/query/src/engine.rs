//! # Query Engine
//!
//! Read-only queries over a loaded [`Catalog`]:
//! - `find_by_id`: guarded identifier lookup
//! - `search`: conjunctive filtering by name, id and genre
//! - `distinct_genres`: sorted, deduplicated genre labels
//!
//! The engine only holds an `Arc<Catalog>`, so it is cheap to clone and can
//! be handed to as many threads or tasks as needed without locking.

use std::collections::BTreeSet;
use std::sync::Arc;

use catalog::{Catalog, Movie, MovieId};
use tracing::{info, instrument};

use crate::search::SearchCriteria;

/// Queries over a shared, immutable catalog
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
}

impl QueryEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this engine reads from.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Every movie in canonical order.
    pub fn all_movies(&self) -> &[Movie] {
        self.catalog.movies()
    }

    /// Look up a movie by identifier.
    ///
    /// An absent or non-positive identifier is never looked up and always
    /// yields `None`, even if the dataset holds a record with that id.
    pub fn find_by_id(&self, id: Option<MovieId>) -> Option<&Movie> {
        match id {
            Some(id) if id > 0 => self.catalog.get_movie(id),
            _ => None,
        }
    }

    /// Find the movies matching every supplied criterion.
    ///
    /// With no effective criterion the result is a copy of the whole catalog.
    /// Otherwise movies are returned in canonical order. Never fails: no
    /// match is an empty vector.
    #[instrument(skip(self), level = "debug")]
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Movie> {
        info!(
            "Searching for movies with criteria - name: {:?}, id: {:?}, genre: {:?}",
            criteria.name, criteria.id, criteria.genre
        );

        let pipeline = criteria.to_pipeline();
        if pipeline.is_empty() {
            info!("No search criteria provided, returning all movies");
            return self.catalog.movies().to_vec();
        }

        let results = pipeline.apply(self.catalog.movies());
        info!("Found {} movies matching search criteria", results.len());
        results
    }

    /// Every genre label in the catalog, once each, sorted ascending.
    ///
    /// Deduplication is exact: "Drama" and "drama" are different labels here,
    /// unlike in `search`.
    pub fn distinct_genres(&self) -> Vec<String> {
        self.catalog
            .movies()
            .iter()
            .map(|movie| movie.genre.as_str())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
