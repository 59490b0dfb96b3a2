//! Search criteria as supplied by a caller.

use crate::criteria::{GenreCriterion, IdCriterion, TitleCriterion};
use crate::criteria_pipeline::CriteriaPipeline;
use catalog::MovieId;

/// The three optional dimensions of a search request.
///
/// `None` means "not supplied". For the text fields, a blank string is
/// treated the same way when the search runs, but the distinction is kept
/// here so callers can echo back exactly what they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the title
    pub name: Option<String>,
    /// Exact identifier
    pub id: Option<MovieId>,
    /// Case-insensitive substring of the genre
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when nothing restricts the search.
    pub fn is_unrestricted(&self) -> bool {
        self.to_pipeline().is_empty()
    }

    /// Build the pipeline holding only the supplied criteria.
    pub fn to_pipeline(&self) -> CriteriaPipeline {
        CriteriaPipeline::new()
            .add_optional(self.id.map(IdCriterion::new))
            .add_optional(self.name.as_deref().and_then(TitleCriterion::new))
            .add_optional(self.genre.as_deref().and_then(GenreCriterion::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unrestricted() {
        assert!(SearchCriteria::new().is_unrestricted());
    }

    #[test]
    fn test_blank_strings_are_unrestricted() {
        let criteria = SearchCriteria::new().with_name("").with_genre("   ");
        assert!(criteria.is_unrestricted());
        assert_eq!(criteria.name.as_deref(), Some(""));
    }

    #[test]
    fn test_any_id_restricts() {
        assert!(!SearchCriteria::new().with_id(999).is_unrestricted());
        assert_eq!(SearchCriteria::new().with_id(1).to_pipeline().len(), 1);
    }

    #[test]
    fn test_pipeline_holds_each_supplied_criterion() {
        let criteria = SearchCriteria::new()
            .with_name("the")
            .with_id(1)
            .with_genre("drama");
        assert_eq!(criteria.to_pipeline().len(), 3);
    }
}
