// Core algorithm exports
pub mod filters;
pub mod ranking;
pub mod search;
pub mod validation;

pub use filters::{matches_query, RestaurantQuery};
pub use ranking::{compare_restaurants, rank};
pub use search::{SearchEngine, RESULT_LIMIT};
pub use validation::{validate_criteria, SearchError};
