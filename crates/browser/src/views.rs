//! View models handed to a renderer.
//!
//! Plain data only. Everything a page shows, including themed banners, is
//! decided before a view is built.

use catalog::{Movie, MovieId};
use serde::Serialize;

use crate::reviews::Review;

/// Full listing of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct MovieListView {
    pub movies: Vec<Movie>,
    /// Genre facet values for the search form
    pub genres: Vec<String>,
}

/// Result page of a search request.
///
/// The `search_*` fields echo the request back so a form can be refilled.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchView {
    pub movies: Vec<Movie>,
    pub genres: Vec<String>,
    pub search_performed: bool,
    pub search_name: Option<String>,
    pub search_id: Option<MovieId>,
    pub search_genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A single movie with its reviews.
#[derive(Debug, Clone, Serialize)]
pub struct DetailsView {
    pub movie: Movie,
    pub reviews: Vec<Review>,
}

/// Outcome of a details request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailsOutcome {
    Found(DetailsView),
    NotFound { title: String, message: String },
}
