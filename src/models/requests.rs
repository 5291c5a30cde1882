use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use thiserror::Error;
use validator::Validate;

use crate::models::domain::SearchCriteria;

/// Errors raised while turning raw request fields into search criteria
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("{0} must be a whole number")]
    NotAWholeNumber(&'static str),
}

/// Search request as submitted through query parameters
///
/// Every field arrives as text, like the input boxes of a search form.
/// Numeric fields are parsed by [`SearchQuery::into_criteria`].
///
/// GET /api/v1/restaurants/search?name=&rating=&distance=&price=&cuisine=&format=
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub rating: Option<String>,
    pub distance: Option<String>,
    pub price: Option<String>,
    #[validate(length(max = 100))]
    pub cuisine: Option<String>,
    /// `text` for a numbered plain-text listing, JSON otherwise
    pub format: Option<String>,
}

impl SearchQuery {
    pub fn wants_text(&self) -> bool {
        self.format
            .as_deref()
            .is_some_and(|f| f.trim().eq_ignore_ascii_case("text"))
    }

    pub fn into_criteria(self) -> Result<SearchCriteria, RequestError> {
        Ok(SearchCriteria {
            name: trimmed(self.name),
            rating: parse_or_none(self.rating.as_deref(), "rating")?,
            distance: parse_or_none(self.distance.as_deref(), "distance")?,
            price: parse_or_none(self.price.as_deref(), "price")?,
            cuisine: trimmed(self.cuisine),
        })
    }
}

/// Search request as a JSON body
///
/// POST /api/v1/restaurants/search
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchBody {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub distance: Option<i32>,
    #[serde(default)]
    pub price: Option<i32>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub cuisine: Option<String>,
}

impl From<SearchBody> for SearchCriteria {
    fn from(body: SearchBody) -> Self {
        SearchCriteria {
            name: trimmed(body.name),
            rating: body.rating,
            distance: body.distance,
            price: body.price,
            cuisine: trimmed(body.cuisine),
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional integer field; blank input means "not set"
///
/// Integers too large for `i32` saturate so the search engine reports them
/// as out of range rather than as non-numeric.
fn parse_or_none(value: Option<&str>, field: &'static str) -> Result<Option<i32>, RequestError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => match text.parse::<i32>() {
            Ok(n) => Ok(Some(n)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(Some(i32::MAX)),
                IntErrorKind::NegOverflow => Ok(Some(i32::MIN)),
                _ => Err(RequestError::NotAWholeNumber(field)),
            },
        },
    }
}
