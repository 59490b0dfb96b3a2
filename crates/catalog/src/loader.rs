//! Loader for the JSON movie dataset.
//!
//! The dataset is a single JSON array of movie objects:
//!
//! ```json
//! [
//!   { "id": 1, "movieName": "The Prison Escape", "director": "John Director",
//!     "year": 1994, "genre": "Drama", "description": "...",
//!     "duration": 142, "imdbRating": 5.0 }
//! ]
//! ```
//!
//! Every entry point reads the whole source before parsing, and any problem
//! (unreadable source, invalid JSON, a missing field, a wrong field type)
//! fails the entire load. Falling back to an empty catalog is the caller's
//! decision, not the loader's.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Movie};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::info;

/// Load a catalog from any byte source.
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Catalog> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let movies: Vec<Movie> = serde_json::from_slice(&bytes)?;
    let catalog = Catalog::from_movies(movies);

    info!(
        "Loaded {} movies ({} distinct ids)",
        catalog.len(),
        catalog.indexed_count()
    );
    Ok(catalog)
}

/// Load a catalog from an in-memory JSON document.
pub fn load_from_str(json: &str) -> Result<Catalog> {
    load_from_reader(json.as_bytes())
}

/// Load a catalog from a file on disk.
pub fn load_from_file(path: &Path) -> Result<Catalog> {
    info!("Loading movie dataset from {:?}", path);

    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::Io(err),
    })?;

    load_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_MOVIES: &str = r#"[
        {"id": 1, "movieName": "The Prison Escape", "director": "John Director",
         "year": 1994, "genre": "Drama", "description": "Two men bond.",
         "duration": 142, "imdbRating": 5.0},
        {"id": 2, "movieName": "Space Wars", "director": "Jane Doe",
         "year": 1977, "genre": "Sci-Fi", "description": "Lasers.",
         "duration": 121, "imdbRating": 4.5}
    ]"#;

    #[test]
    fn test_load_preserves_order_and_fields() {
        let catalog = load_from_str(TWO_MOVIES).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = &catalog.movies()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.title, "The Prison Escape");
        assert_eq!(first.director, "John Director");
        assert_eq!(first.year, 1994);
        assert_eq!(first.genre, "Drama");
        assert_eq!(first.duration_minutes, 142);
        assert_eq!(first.imdb_rating, 5.0);
        assert_eq!(catalog.movies()[1].title, "Space Wars");
    }

    #[test]
    fn test_integer_rating_is_accepted() {
        let json = r#"[{"id": 3, "movieName": "X", "director": "D", "year": 2001,
            "genre": "Drama", "description": "", "duration": 90, "imdbRating": 4}]"#;
        let catalog = load_from_str(json).unwrap();
        assert_eq!(catalog.get_movie(3).unwrap().imdb_rating, 4.0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"[{"id": 3, "movieName": "X", "director": "D", "year": 2001,
            "genre": "Drama", "description": "", "duration": 90, "imdbRating": 4.1,
            "poster": "x.png"}]"#;
        assert_eq!(load_from_str(json).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_array_is_an_empty_catalog() {
        let catalog = load_from_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_field_fails() {
        let json = r#"[{"id": 1, "movieName": "No Genre", "director": "D", "year": 2000,
            "description": "", "duration": 90, "imdbRating": 7.0}]"#;
        let err = load_from_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_wrong_field_type_fails() {
        let json = r#"[{"id": "one", "movieName": "X", "director": "D", "year": 2000,
            "genre": "Drama", "description": "", "duration": 90, "imdbRating": 7.0}]"#;
        assert!(matches!(
            load_from_str(json),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_non_array_fails() {
        assert!(matches!(
            load_from_str(r#"{"movies": []}"#),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_truncated_json_fails() {
        let truncated = &TWO_MOVIES[..TWO_MOVIES.len() / 2];
        assert!(load_from_str(truncated).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", TWO_MOVIES).unwrap();

        let catalog = load_from_file(temp_file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get_movie(2).is_some());
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_from_file(Path::new("/nonexistent/movies.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
