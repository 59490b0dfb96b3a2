//! # Movie Browser
//!
//! Turns catalog queries into view models:
//! 1. `list`: every movie plus the genre facet
//! 2. `search`: validated search with themed result banners
//! 3. `details`: one movie with its reviews, or a not-found page
//!
//! The browser never fails. Invalid input and empty results become messages
//! on the view instead of errors.

use std::sync::Arc;

use catalog::MovieId;
use query::{QueryEngine, SearchCriteria};
use tracing::{info, warn};

use crate::messages;
use crate::reviews::ReviewSource;
use crate::views::{DetailsOutcome, DetailsView, MovieListView, SearchView};

/// Presentation layer over a query engine and a review source
#[derive(Clone)]
pub struct MovieBrowser {
    engine: QueryEngine,
    reviews: Arc<dyn ReviewSource>,
}

impl MovieBrowser {
    /// Create a browser from its two collaborators
    ///
    /// # Arguments
    /// * `engine` - Query engine over the shared catalog
    /// * `reviews` - Where details pages get their reviews from
    pub fn new(engine: QueryEngine, reviews: Arc<dyn ReviewSource>) -> Self {
        Self { engine, reviews }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// The full listing page
    pub fn list(&self) -> MovieListView {
        info!("Fetching movies");
        MovieListView {
            movies: self.engine.all_movies().to_vec(),
            genres: self.engine.distinct_genres(),
        }
    }

    /// The search results page
    ///
    /// A supplied id that is zero or negative short-circuits the search: the
    /// page shows no movies, drops the id from the echoed form and carries
    /// an error banner.
    pub fn search(&self, criteria: &SearchCriteria) -> SearchView {
        let mut view = SearchView {
            genres: self.engine.distinct_genres(),
            search_performed: true,
            search_name: criteria.name.clone(),
            search_id: criteria.id,
            search_genre: criteria.genre.clone(),
            ..SearchView::default()
        };

        if let Some(id) = criteria.id.filter(|&id| id <= 0) {
            warn!("Invalid movie ID provided: {}", id);
            view.search_id = None;
            view.error_message = Some(messages::INVALID_ID.to_string());
            return view;
        }

        view.movies = self.engine.search(criteria);

        if view.movies.is_empty() {
            if !criteria.is_unrestricted() {
                view.no_results_message = Some(messages::NO_RESULTS.to_string());
            }
        } else {
            view.success_message = Some(messages::results_found(view.movies.len()));
        }

        info!("Search completed. Found {} movies", view.movies.len());
        view
    }

    /// The details page for one movie
    pub fn details(&self, id: MovieId) -> DetailsOutcome {
        info!("Fetching details for movie ID: {}", id);

        match self.engine.find_by_id(Some(id)) {
            Some(movie) => DetailsOutcome::Found(DetailsView {
                movie: movie.clone(),
                reviews: self.reviews.reviews_for(movie.id),
            }),
            None => {
                warn!("Movie with ID {} not found", id);
                DetailsOutcome::NotFound {
                    title: messages::NOT_FOUND_TITLE.to_string(),
                    message: messages::movie_not_found(id),
                }
            }
        }
    }
}
