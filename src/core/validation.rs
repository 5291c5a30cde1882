use std::ops::RangeInclusive;
use thiserror::Error;

use crate::models::{SearchCriteria, DISTANCE_RANGE, PRICE_RANGE, RATING_RANGE};

/// Errors returned by a search
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A numeric criterion fell outside its documented domain
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidArgument {
        field: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },
}

/// Reject criteria whose numeric thresholds are out of range
///
/// Runs before any filtering. Name and cuisine fragments have no range.
pub fn validate_criteria(criteria: &SearchCriteria) -> Result<(), SearchError> {
    check_range("rating", criteria.rating, RATING_RANGE)?;
    check_range("distance", criteria.distance, DISTANCE_RANGE)?;
    check_range("price", criteria.price, PRICE_RANGE)?;
    Ok(())
}

#[inline]
fn check_range(
    field: &'static str,
    value: Option<i32>,
    range: RangeInclusive<i32>,
) -> Result<(), SearchError> {
    match value {
        Some(v) if !range.contains(&v) => Err(SearchError::InvalidArgument {
            field,
            min: *range.start(),
            max: *range.end(),
            value: v,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_criteria_valid() {
        assert!(validate_criteria(&SearchCriteria::default()).is_ok());
    }

    #[test]
    fn test_bounds_inclusive() {
        let low = SearchCriteria::new().min_rating(1).max_distance(1).max_price(10);
        let high = SearchCriteria::new().min_rating(5).max_distance(10).max_price(50);

        assert!(validate_criteria(&low).is_ok());
        assert!(validate_criteria(&high).is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        for rating in [0, 6, -1] {
            let err = validate_criteria(&SearchCriteria::new().min_rating(rating)).unwrap_err();
            assert_eq!(
                err,
                SearchError::InvalidArgument { field: "rating", min: 1, max: 5, value: rating }
            );
        }
    }

    #[test]
    fn test_distance_out_of_range() {
        let err = validate_criteria(&SearchCriteria::new().max_distance(11)).unwrap_err();
        assert_eq!(err.to_string(), "distance must be between 1 and 10, got 11");
    }

    #[test]
    fn test_price_out_of_range() {
        for price in [9, 51] {
            let err = validate_criteria(&SearchCriteria::new().max_price(price)).unwrap_err();
            assert!(matches!(err, SearchError::InvalidArgument { field: "price", .. }));
        }
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let criteria = SearchCriteria::new().min_rating(0).max_price(100);
        let err = validate_criteria(&criteria).unwrap_err();
        assert!(matches!(err, SearchError::InvalidArgument { field: "rating", .. }));
    }
}
