//! Review lookup.
//!
//! The browser only ever asks for the reviews of one movie at a time, so the
//! seam is a single method keyed by the catalog's identifier type.

use catalog::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// A single review of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub author: String,
    pub rating: f64,
    pub comment: String,
}

/// Source of reviews for the details view.
pub trait ReviewSource: Send + Sync {
    /// Reviews for `movie_id`, oldest first. Empty when there are none.
    fn reviews_for(&self, movie_id: MovieId) -> Vec<Review>;
}

/// Errors that can occur while loading a review file
#[derive(Error, Debug)]
pub enum ReviewLoadError {
    #[error("Failed to open reviews file: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid reviews JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reviews held in memory, grouped by movie.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviews {
    by_movie: HashMap<MovieId, Vec<Review>>,
}

impl InMemoryReviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `reviews` by movie, keeping their relative order.
    pub fn from_reviews(reviews: impl IntoIterator<Item = Review>) -> Self {
        let mut store = Self::new();
        for review in reviews {
            store.insert(review);
        }
        store
    }

    pub fn insert(&mut self, review: Review) {
        self.by_movie
            .entry(review.movie_id)
            .or_default()
            .push(review);
    }

    /// Total number of reviews across all movies.
    pub fn len(&self) -> usize {
        self.by_movie.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_movie.is_empty()
    }

    /// Load a JSON array of reviews.
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Self, ReviewLoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let reviews: Vec<Review> = serde_json::from_slice(&bytes)?;
        let store = Self::from_reviews(reviews);
        info!("Loaded {} reviews", store.len());
        Ok(store)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ReviewLoadError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ReviewLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ReviewLoadError::Io(err),
        })?;
        Self::load_from_reader(file)
    }
}

impl ReviewSource for InMemoryReviews {
    fn reviews_for(&self, movie_id: MovieId) -> Vec<Review> {
        self.by_movie.get(&movie_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn review(movie_id: MovieId, author: &str) -> Review {
        Review {
            movie_id,
            author: author.to_string(),
            rating: 4.0,
            comment: "Good".to_string(),
        }
    }

    #[test]
    fn test_reviews_grouped_in_order() {
        let store = InMemoryReviews::from_reviews(vec![
            review(1, "Ann"),
            review(2, "Bob"),
            review(1, "Cid"),
        ]);

        let authors: Vec<String> = store.reviews_for(1).into_iter().map(|r| r.author).collect();
        assert_eq!(authors, vec!["Ann", "Cid"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_unknown_movie_has_no_reviews() {
        let store = InMemoryReviews::new();
        assert!(store.is_empty());
        assert!(store.reviews_for(99).is_empty());
    }

    #[test]
    fn test_load_from_reader() {
        let json = r#"[{"movieId": 6, "author": "Lin", "rating": 4.0, "comment": "Dreamy"}]"#;
        let store = InMemoryReviews::load_from_reader(json.as_bytes()).unwrap();

        let reviews = store.reviews_for(6);
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].author, "Lin");
    }

    #[test]
    fn test_load_invalid_json() {
        let result = InMemoryReviews::load_from_reader("[{".as_bytes());
        assert!(matches!(result, Err(ReviewLoadError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"[{{"movieId": 1, "author": "Sam", "rating": 5, "comment": "Great"}}]"#
        )
        .unwrap();

        let store = InMemoryReviews::load_from_file(temp_file.path()).unwrap();
        assert_eq!(store.reviews_for(1)[0].rating, 5.0);
    }

    #[test]
    fn test_load_file_not_found() {
        let result = InMemoryReviews::load_from_file(Path::new("/nonexistent/reviews.json"));
        assert!(matches!(result, Err(ReviewLoadError::FileNotFound { .. })));
    }
}
