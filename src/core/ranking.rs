use std::cmp::Ordering;

use crate::models::Restaurant;

/// Order two restaurants by relevance
///
/// Ranking keys, in priority order:
/// 1. distance ascending (closer first)
/// 2. rating descending (better first)
/// 3. price ascending (cheaper first)
///
/// Restaurants equal on all three keys compare as `Equal`; their relative
/// order in a result is not part of the contract.
#[inline]
pub fn compare_restaurants(a: &Restaurant, b: &Restaurant) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.rating.cmp(&a.rating))
        .then_with(|| a.price.cmp(&b.price))
}

/// Sort restaurants best first
pub fn rank(restaurants: &mut [&Restaurant]) {
    restaurants.sort_by(|a, b| compare_restaurants(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_dominates() {
        let near = Restaurant::new("Near", 1, 1, 50, "Thai");
        let far = Restaurant::new("Far", 5, 2, 10, "Thai");

        assert_eq!(compare_restaurants(&near, &far), Ordering::Less);
    }

    #[test]
    fn test_rating_breaks_distance_tie() {
        let better = Restaurant::new("Better", 5, 3, 40, "Thai");
        let worse = Restaurant::new("Worse", 2, 3, 10, "Thai");

        assert_eq!(compare_restaurants(&better, &worse), Ordering::Less);
    }

    #[test]
    fn test_price_breaks_rating_tie() {
        let cheap = Restaurant::new("Cheap", 4, 3, 15, "Thai");
        let pricey = Restaurant::new("Pricey", 4, 3, 45, "Thai");

        assert_eq!(compare_restaurants(&cheap, &pricey), Ordering::Less);
    }

    #[test]
    fn test_full_tie_is_equal() {
        let a = Restaurant::new("A", 4, 3, 15, "Thai");
        let b = Restaurant::new("B", 4, 3, 15, "Greek");

        assert_eq!(compare_restaurants(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_rank_orders_slice() {
        let a = Restaurant::new("A", 3, 2, 20, "Thai");
        let b = Restaurant::new("B", 5, 1, 30, "Thai");
        let c = Restaurant::new("C", 5, 1, 20, "Thai");

        let mut refs = vec![&a, &b, &c];
        rank(&mut refs);

        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }
}
