//! Criterion implementations for movie search.
//!
//! This module contains the concrete criteria that can be composed into a
//! CriteriaPipeline, plus the text normalization they share.

pub mod genre;
pub mod id;
pub mod title;

// Re-export for convenience
pub use genre::GenreCriterion;
pub use id::IdCriterion;
pub use title::TitleCriterion;

/// Normalize user search text for substring matching.
///
/// Returns `None` when the text is empty after trimming, which makes it
/// equivalent to not supplying the criterion at all.
pub(crate) fn normalize_search_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive containment of an already normalized needle.
pub(crate) fn contains_ignore_case(haystack: &str, normalized_needle: &str) -> bool {
    haystack.to_lowercase().contains(normalized_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_search_text("  Sci-FI \t"), Some("sci-fi".to_string()));
    }

    #[test]
    fn test_blank_text_is_absent() {
        assert_eq!(normalize_search_text(""), None);
        assert_eq!(normalize_search_text("   "), None);
        assert_eq!(normalize_search_text("\n\t "), None);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(
            normalize_search_text(" prison  escape "),
            Some("prison  escape".to_string())
        );
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("The Prison Escape", "prison"));
        assert!(contains_ignore_case("Action/Sci-Fi", "sci"));
        assert!(!contains_ignore_case("Drama", "sci"));
    }
}
