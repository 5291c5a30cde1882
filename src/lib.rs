//! ByteFinder - restaurant search service
//!
//! This library provides the restaurant search engine: it validates optional
//! criteria, filters an in-memory catalog, ranks the survivors by distance,
//! rating and price, and returns the best few. The catalog is loaded once
//! from delimited text files and served over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{SearchEngine, SearchError, RESULT_LIMIT};
pub use models::{Restaurant, SearchCriteria};
pub use services::{Catalog, CatalogError, CatalogLoader};
