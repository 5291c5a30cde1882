use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Restaurant, DISTANCE_RANGE, PRICE_RANGE, RATING_RANGE, UNKNOWN_CUISINE};

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a restaurant row is dropped
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected 5 fields, found {0}")]
    MissingFields(usize),

    #[error("restaurant name is empty")]
    EmptyName,

    #[error("{field} is not a whole number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Counters collected while parsing the restaurant table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

/// Fully materialized restaurant catalog
///
/// Built once by the loader, then handed to the search engine by value.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    stats: LoadStats,
}

impl Catalog {
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn into_restaurants(self) -> Vec<Restaurant> {
        self.restaurants
    }
}

/// Loads the cuisine and restaurant tables from delimited text files
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    restaurants_path: PathBuf,
    cuisines_path: PathBuf,
}

impl CatalogLoader {
    pub fn new(restaurants_path: impl Into<PathBuf>, cuisines_path: impl Into<PathBuf>) -> Self {
        Self {
            restaurants_path: restaurants_path.into(),
            cuisines_path: cuisines_path.into(),
        }
    }

    /// Read both tables and build the catalog
    ///
    /// Cuisines load first so restaurant rows can resolve their cuisine id.
    /// Any I/O failure aborts the whole load.
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        info!("Loading cuisines from: {}", self.cuisines_path.display());
        let cuisines_text = read_table(&self.cuisines_path).await?;
        let cuisines = parse_cuisines(&cuisines_text);

        info!("Loading restaurants from: {}", self.restaurants_path.display());
        let restaurants_text = read_table(&self.restaurants_path).await?;
        let catalog = parse_restaurants(&restaurants_text, &cuisines);

        info!(
            "Loaded {} restaurants ({} cuisines, {} rows skipped)",
            catalog.stats.loaded,
            cuisines.len(),
            catalog.stats.skipped
        );

        Ok(catalog)
    }
}

async fn read_table(path: &Path) -> Result<String, CatalogError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse the cuisine table into an id -> display name map
///
/// The first line is a header. Rows with fewer than two fields are skipped.
/// When an id repeats, the first mapping is kept.
pub fn parse_cuisines(text: &str) -> HashMap<String, String> {
    let mut cuisines = HashMap::new();

    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 2 {
            warn!(line_number = index + 1, content = line, "malformed cuisine row, skipping");
            continue;
        }

        let id = parts[0].trim();
        let name = parts[1].trim();

        if cuisines.contains_key(id) {
            warn!(line_number = index + 1, id, "duplicate cuisine id, keeping first");
            continue;
        }

        cuisines.insert(id.to_string(), name.to_string());
    }

    cuisines
}

/// Parse the restaurant table, resolving cuisine ids through `cuisines`
///
/// The first line is a header. Malformed rows are logged and dropped; they
/// never produce a partial record.
pub fn parse_restaurants(text: &str, cuisines: &HashMap<String, String>) -> Catalog {
    let mut catalog = Catalog::default();

    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_restaurant_row(line, cuisines) {
            Ok(restaurant) => catalog.restaurants.push(restaurant),
            Err(e) => {
                warn!(line_number = index + 1, content = line, "skipping restaurant row: {}", e);
                catalog.stats.skipped += 1;
            }
        }
    }

    catalog.stats.loaded = catalog.restaurants.len();
    catalog
}

/// Parse a single `name,rating,distance,price,cuisine_id` row
pub fn parse_restaurant_row(
    line: &str,
    cuisines: &HashMap<String, String>,
) -> Result<Restaurant, RowError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 5 {
        return Err(RowError::MissingFields(parts.len()));
    }

    let name = parts[0];
    if name.is_empty() {
        return Err(RowError::EmptyName);
    }

    let rating = parse_field("rating", parts[1], &RATING_RANGE)?;
    let distance = parse_field("distance", parts[2], &DISTANCE_RANGE)?;
    let price = parse_field("price", parts[3], &PRICE_RANGE)?;

    let cuisine = cuisines
        .get(parts[4])
        .map(String::as_str)
        .unwrap_or(UNKNOWN_CUISINE);

    Ok(Restaurant::new(name, rating, distance, price, cuisine))
}

fn parse_field(
    field: &'static str,
    text: &str,
    range: &std::ops::RangeInclusive<i32>,
) -> Result<u8, RowError> {
    let value: i32 = text.parse().map_err(|_| RowError::InvalidNumber {
        field,
        value: text.to_string(),
    })?;

    u8::try_from(value)
        .ok()
        .filter(|_| range.contains(&value))
        .ok_or(RowError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
}
