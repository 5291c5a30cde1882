use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Cuisine name used when a restaurant references an unknown cuisine id
pub const UNKNOWN_CUISINE: &str = "Other";

/// Valid customer ratings
pub const RATING_RANGE: RangeInclusive<i32> = 1..=5;
/// Valid distances in miles
pub const DISTANCE_RANGE: RangeInclusive<i32> = 1..=10;
/// Valid prices per person in dollars
pub const PRICE_RANGE: RangeInclusive<i32> = 10..=50;

/// Single restaurant entry with its cuisine already resolved to a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// Customer rating (1 - 5)
    pub rating: u8,
    /// Distance from the office in miles (1 - 10)
    pub distance: u8,
    /// Average price per person in dollars (10 - 50)
    pub price: u8,
    pub cuisine: String,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        rating: u8,
        distance: u8,
        price: u8,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            distance,
            price,
            cuisine: cuisine.into(),
        }
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Rating: {} | Distance: {} | Price: {} | Cuisine: {}",
            self.name, self.rating, self.distance, self.price, self.cuisine
        )
    }
}

/// Optional search criteria
///
/// Every field left as `None` imposes no constraint. Empty name and cuisine
/// strings are treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Partial, case-insensitive restaurant name
    pub name: Option<String>,
    /// Minimum customer rating
    pub rating: Option<i32>,
    /// Maximum distance in miles
    pub distance: Option<i32>,
    /// Maximum price per person
    pub price: Option<i32>,
    /// Partial, case-insensitive cuisine name
    pub cuisine: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn min_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn max_distance(mut self, distance: i32) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn max_price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }
}

/// Render results as a numbered listing, one restaurant per line
pub fn format_results(results: &[Restaurant]) -> String {
    if results.is_empty() {
        return "No matches found.\n".to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}).  {}\n", i + 1, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let r = Restaurant::new("Deliciousgenix", 4, 1, 10, "Spanish");
        assert_eq!(
            r.to_string(),
            "Deliciousgenix | Rating: 4 | Distance: 1 | Price: 10 | Cuisine: Spanish"
        );
    }

    #[test]
    fn test_format_results_numbered() {
        let results = vec![
            Restaurant::new("A", 4, 1, 10, "Thai"),
            Restaurant::new("B", 3, 2, 20, "Greek"),
        ];

        let text = format_results(&results);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1).  A | Rating: 4"));
        assert!(lines[1].starts_with("2).  B | Rating: 3"));
    }

    #[test]
    fn test_format_results_empty() {
        assert_eq!(format_results(&[]), "No matches found.\n");
    }

    #[test]
    fn test_criteria_builder() {
        let criteria = SearchCriteria::new().min_rating(3).max_price(15).cuisine("thai");

        assert_eq!(criteria.rating, Some(3));
        assert_eq!(criteria.price, Some(15));
        assert_eq!(criteria.cuisine.as_deref(), Some("thai"));
        assert!(criteria.name.is_none());
        assert!(criteria.distance.is_none());
    }
}
