//! Fail-open catalog loading.
//!
//! The loader reports every failure. This is where that failure is turned
//! into an empty catalog, so a broken dataset degrades the app to "no
//! movies" instead of stopping it.

use catalog::{loader, Catalog};
use std::path::Path;
use tracing::error;

/// Substitute an empty catalog for a failed load, logging the failure.
pub fn catalog_or_empty(result: catalog::Result<Catalog>) -> Catalog {
    match result {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Failed to load movies from JSON: {}", err);
            Catalog::empty()
        }
    }
}

/// Load `path`, falling back to an empty catalog on any failure.
pub fn load_catalog_or_empty(path: &Path) -> Catalog {
    catalog_or_empty(loader::load_from_file(path))
}
