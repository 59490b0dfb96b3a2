//! Search and retrieval over a loaded movie catalog.
//!
//! This crate provides:
//! - Criterion trait and implementations for id, title and genre matching
//! - CriteriaPipeline for composing criteria conjunctively
//! - SearchCriteria, the caller-facing search request
//! - QueryEngine exposing `find_by_id`, `search` and `distinct_genres`
//!
//! ## Example Usage
//! ```ignore
//! use query::{QueryEngine, SearchCriteria};
//!
//! let engine = QueryEngine::new(catalog.clone());
//!
//! let dramas = engine.search(&SearchCriteria::new().with_name("the").with_genre("drama"));
//! let movie = engine.find_by_id(Some(1));
//! let genres = engine.distinct_genres();
//! ```

pub mod traits;
pub mod criteria;
pub mod criteria_pipeline;
pub mod search;
pub mod engine;

// Re-export main types
pub use traits::Criterion;
pub use criteria_pipeline::CriteriaPipeline;
pub use search::SearchCriteria;
pub use engine::QueryEngine;
