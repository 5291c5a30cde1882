// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Restaurant, SearchCriteria, UNKNOWN_CUISINE, RATING_RANGE, DISTANCE_RANGE, PRICE_RANGE, format_results};
pub use requests::{SearchQuery, SearchBody, RequestError};
pub use responses::{SearchResponse, HealthResponse, ErrorResponse};
