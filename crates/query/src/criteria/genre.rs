//! Criterion matching part of a movie's genre label.
//!
//! Genre labels are free text ("Action/Sci-Fi"), so a search for "sci"
//! matches every label containing it.

use super::{contains_ignore_case, normalize_search_text};
use crate::traits::Criterion;
use catalog::Movie;

/// Keeps movies whose genre contains the search text, ignoring case.
pub struct GenreCriterion {
    needle: String,
}

impl GenreCriterion {
    /// Returns `None` when `text` is blank.
    pub fn new(text: &str) -> Option<Self> {
        normalize_search_text(text).map(|needle| Self { needle })
    }
}

impl Criterion for GenreCriterion {
    fn name(&self) -> &str {
        "GenreCriterion"
    }

    fn matches(&self, movie: &Movie) -> bool {
        contains_ignore_case(&movie.genre, &self.needle)
    }
}
