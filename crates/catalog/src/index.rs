//! Identifier index construction.
//!
//! The index maps every identifier to its position in the canonical movie
//! list. It is derived data: rebuilding it from the same list always gives
//! the same map.

use crate::types::{Movie, MovieId};
use std::collections::HashMap;
use tracing::debug;

/// Build the identifier index for `movies`.
///
/// Records are inserted in order, so a later record with an identifier that
/// was already seen replaces the earlier entry. Both records stay in the
/// canonical list.
pub(crate) fn build_id_index(movies: &[Movie]) -> HashMap<MovieId, usize> {
    let mut index = HashMap::with_capacity(movies.len());

    for (position, movie) in movies.iter().enumerate() {
        if let Some(previous) = index.insert(movie.id, position) {
            debug!(
                "Movie id {} at position {} shadows position {} in the index",
                movie.id, position, previous
            );
        }
    }

    index
}
