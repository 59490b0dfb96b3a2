//! Core traits for search criteria.
//!
//! This module defines the Criterion trait that lets independent filter
//! dimensions be composed into a single conjunctive search.

use catalog::Movie;

/// One filter dimension of a search.
///
/// All criteria must implement this trait to be used in the CriteriaPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared between threads
/// - `matches` borrows the movie, so filtering never clones records that
///   end up rejected
pub trait Criterion: Send + Sync {
    /// Returns the name of this criterion (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` satisfies this criterion.
    fn matches(&self, movie: &Movie) -> bool;
}
