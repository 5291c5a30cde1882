use std::sync::Arc;

use crate::core::{
    filters::{matches_query, RestaurantQuery},
    ranking::rank,
    validation::{validate_criteria, SearchError},
};
use crate::models::{Restaurant, SearchCriteria};

/// Maximum number of restaurants returned by a search
pub const RESULT_LIMIT: usize = 5;

/// Restaurant search engine - validates, filters, ranks and caps
///
/// # Pipeline Stages
/// 1. Criteria validation
/// 2. Conjunctive filtering
/// 3. Ranking (distance, rating, price)
/// 4. Truncation to [`RESULT_LIMIT`]
///
/// The catalog is moved in once at construction and shared read-only from
/// then on; cloning an engine shares the same catalog.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Arc<[Restaurant]>,
}

impl SearchEngine {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            catalog: restaurants.into(),
        }
    }

    /// Number of restaurants in the catalog
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Find the best matching restaurants for the given criteria
    ///
    /// # Arguments
    /// * `criteria` - Optional constraints; absent fields match everything
    ///
    /// # Returns
    /// Up to [`RESULT_LIMIT`] restaurants, best first. A valid search that
    /// matches nothing returns an empty list.
    ///
    /// # Errors
    /// [`SearchError::InvalidArgument`] when a numeric threshold is out of range.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Restaurant>, SearchError> {
        // Stage 1: Validation
        validate_criteria(criteria)?;

        // Stage 2: Filtering
        let query = RestaurantQuery::from_criteria(criteria);
        let mut matches: Vec<&Restaurant> = self
            .catalog
            .iter()
            .filter(|restaurant| matches_query(restaurant, &query))
            .collect();

        let total_matches = matches.len();

        // Stage 3 & 4: Rank and cap
        rank(&mut matches);
        matches.truncate(RESULT_LIMIT);

        tracing::debug!(
            "Search {:?} matched {} of {} restaurants, returning {}",
            criteria,
            total_matches,
            self.catalog.len(),
            matches.len()
        );

        Ok(matches.into_iter().cloned().collect())
    }
}
