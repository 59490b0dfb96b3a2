//! The CriteriaPipeline combines multiple criteria.
//!
//! This module provides the CriteriaPipeline struct that chains criteria
//! together using the builder pattern. A movie passes the pipeline only if it
//! passes every criterion in it.

use crate::traits::Criterion;
use catalog::Movie;
use tracing::debug;

/// Chains multiple criteria together into a conjunctive filter.
///
/// ## Usage
/// ```ignore
/// let pipeline = CriteriaPipeline::new()
///     .add_criterion(IdCriterion::new(1))
///     .add_criterion(GenreCriterion::new("drama").unwrap());
///
/// let matches = pipeline.apply(catalog.movies());
/// ```
pub struct CriteriaPipeline {
    criteria: Vec<Box<dyn Criterion>>,
}

impl CriteriaPipeline {
    /// Create a new empty CriteriaPipeline.
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Add a criterion to the pipeline (builder pattern).
    pub fn add_criterion(mut self, criterion: impl Criterion + 'static) -> Self {
        self.criteria.push(Box::new(criterion));
        self
    }

    /// Add a criterion only if one was built.
    ///
    /// Convenient with constructors that return `None` for blank input.
    pub fn add_optional(self, criterion: Option<impl Criterion + 'static>) -> Self {
        match criterion {
            Some(criterion) => self.add_criterion(criterion),
            None => self,
        }
    }

    /// True when no criterion has been added.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Whether `movie` passes every criterion.
    pub fn matches(&self, movie: &Movie) -> bool {
        self.criteria.iter().all(|criterion| criterion.matches(movie))
    }

    /// Apply all criteria in sequence to `movies`.
    ///
    /// ## Algorithm
    /// 1. Start with every movie, borrowed
    /// 2. For each criterion in order, retain the movies that match it
    /// 3. Clone the survivors, in their original order
    ///
    /// An empty pipeline keeps every movie.
    pub fn apply(&self, movies: &[Movie]) -> Vec<Movie> {
        let mut current: Vec<&Movie> = movies.iter().collect();
        for criterion in &self.criteria {
            debug!(
                "Applying criterion: {} (input count: {})",
                criterion.name(),
                current.len()
            );
            current.retain(|movie| criterion.matches(movie));
            debug!(
                "Criterion applied: {} (output count: {})",
                criterion.name(),
                current.len()
            );
        }
        current.into_iter().cloned().collect()
    }
}

impl Default for CriteriaPipeline {
    fn default() -> Self {
        Self::new()
    }
}
