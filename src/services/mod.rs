// Service exports
pub mod catalog;

pub use catalog::{Catalog, CatalogError, CatalogLoader, LoadStats, RowError, parse_cuisines, parse_restaurants};
