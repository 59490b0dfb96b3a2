//! Criterion matching part of a movie title.

use super::{contains_ignore_case, normalize_search_text};
use crate::traits::Criterion;
use catalog::Movie;

/// Keeps movies whose title contains the search text, ignoring case.
///
/// ## Algorithm
/// 1. Trim the search text and lowercase it once, at construction
/// 2. Lowercase each title and check for substring containment
pub struct TitleCriterion {
    needle: String,
}

impl TitleCriterion {
    /// Create a new TitleCriterion.
    ///
    /// Returns `None` when `text` is blank, since blank text does not
    /// restrict a search.
    pub fn new(text: &str) -> Option<Self> {
        normalize_search_text(text).map(|needle| Self { needle })
    }
}

impl Criterion for TitleCriterion {
    fn name(&self) -> &str {
        "TitleCriterion"
    }

    fn matches(&self, movie: &Movie) -> bool {
        contains_ignore_case(&movie.title, &self.needle)
    }
}
