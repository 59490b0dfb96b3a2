//! User-facing themed messages.
//!
//! The wording is part of the user experience, so tests pin it exactly.

use catalog::MovieId;

/// Shown instead of results when a search asks for a non-positive id.
pub const INVALID_ID: &str = "Shiver me timbers! That ID be not a valid treasure map number, matey!";

/// Shown when a search with at least one criterion matched nothing.
pub const NO_RESULTS: &str = "Arrr! No treasure found with those search terms, ye scurvy dog! \
                              Try different criteria to find yer movie bounty!";

/// Page title for a details request that matched nothing.
pub const NOT_FOUND_TITLE: &str = "Movie Not Found";

/// Success banner for a non-empty search result.
pub fn results_found(count: usize) -> String {
    if count == 1 {
        "Ahoy! Found 1 movie treasure for ye, matey!".to_string()
    } else {
        format!("Shiver me timbers! Found {} movie treasures in our chest!", count)
    }
}

/// Body text for a details request that matched nothing.
pub fn movie_not_found(id: MovieId) -> String {
    format!(
        "Arrr! That movie treasure with ID {} has sailed away to Davy Jones' locker, matey!",
        id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_found_singular() {
        assert_eq!(results_found(1), "Ahoy! Found 1 movie treasure for ye, matey!");
    }

    #[test]
    fn test_results_found_plural() {
        assert_eq!(
            results_found(3),
            "Shiver me timbers! Found 3 movie treasures in our chest!"
        );
    }

    #[test]
    fn test_no_results_is_one_line() {
        assert!(NO_RESULTS.starts_with("Arrr! No treasure found"));
        assert!(NO_RESULTS.contains("ye scurvy dog! Try different criteria"));
    }

    #[test]
    fn test_movie_not_found_names_the_id() {
        assert!(movie_not_found(42).contains("ID 42 "));
    }
}
