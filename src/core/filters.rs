use crate::models::{Restaurant, SearchCriteria};

/// Criteria prepared for matching against many restaurants
///
/// Text fragments are lowercased once here instead of per record; empty
/// fragments are dropped so they impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct RestaurantQuery {
    pub name: Option<String>,
    pub min_rating: Option<i32>,
    pub max_distance: Option<i32>,
    pub max_price: Option<i32>,
    pub cuisine: Option<String>,
}

impl RestaurantQuery {
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        Self {
            name: fold(criteria.name.as_deref()),
            min_rating: criteria.rating,
            max_distance: criteria.distance,
            max_price: criteria.price,
            cuisine: fold(criteria.cuisine.as_deref()),
        }
    }
}

fn fold(fragment: Option<&str>) -> Option<String> {
    fragment
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase)
}

/// Check if a restaurant satisfies every active constraint of the query
#[inline]
pub fn matches_query(restaurant: &Restaurant, query: &RestaurantQuery) -> bool {
    if let Some(name) = &query.name {
        if !restaurant.name.to_lowercase().contains(name.as_str()) {
            return false;
        }
    }

    if let Some(min_rating) = query.min_rating {
        if i32::from(restaurant.rating) < min_rating {
            return false;
        }
    }

    if let Some(max_distance) = query.max_distance {
        if i32::from(restaurant.distance) > max_distance {
            return false;
        }
    }

    if let Some(max_price) = query.max_price {
        if i32::from(restaurant.price) > max_price {
            return false;
        }
    }

    if let Some(cuisine) = &query.cuisine {
        if !restaurant.cuisine.to_lowercase().contains(cuisine.as_str()) {
            return false;
        }
    }

    true
}
