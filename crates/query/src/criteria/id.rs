//! Criterion matching a single movie identifier exactly.

use crate::traits::Criterion;
use catalog::{Movie, MovieId};

/// Keeps only the movie(s) whose identifier equals the requested one.
///
/// No partial matching: 1 does not match 10 or 21. The catalog index is not
/// consulted, so every record carrying a duplicated identifier matches.
pub struct IdCriterion {
    id: MovieId,
}

impl IdCriterion {
    pub fn new(id: MovieId) -> Self {
        Self { id }
    }
}

impl Criterion for IdCriterion {
    fn name(&self) -> &str {
        "IdCriterion"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.id == self.id
    }
}
