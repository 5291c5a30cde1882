use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{SearchEngine, SearchError};
use crate::models::{
    format_results, ErrorResponse, HealthResponse, SearchBody, SearchCriteria, SearchQuery,
    SearchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: SearchEngine,
}

/// Configure all restaurant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/restaurants/search", web::get().to(search_query))
        .route("/restaurants/search", web::post().to(search_body));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        restaurants: state.engine.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search from query parameters
///
/// GET /api/v1/restaurants/search?name=deli&rating=3&distance=&price=20&cuisine=&format=text
///
/// Numeric parameters arrive as text; blank values are ignored.
/// `format=text` returns a numbered plain-text listing.
async fn search_query(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    let query = query.into_inner();

    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for search query: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let as_text = query.wants_text();

    let criteria = match query.into_criteria() {
        Ok(criteria) => criteria,
        Err(e) => {
            tracing::info!("Rejected search query: {}", e);
            return HttpResponse::BadRequest()
                .json(ErrorResponse::bad_request("Invalid input", e.to_string()));
        }
    };

    run_search(&state.engine, &criteria, as_text)
}

/// Search from a JSON body
///
/// POST /api/v1/restaurants/search
///
/// Request body (every field optional):
/// ```json
/// {
///   "name": "string",
///   "rating": 3,
///   "distance": 5,
///   "price": 20,
///   "cuisine": "string"
/// }
/// ```
async fn search_body(
    state: web::Data<AppState>,
    body: web::Json<SearchBody>,
) -> HttpResponse {
    let body = body.into_inner();

    if let Err(errors) = body.validate() {
        tracing::info!("Validation failed for search body: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    run_search(&state.engine, &SearchCriteria::from(body), false)
}

fn run_search(engine: &SearchEngine, criteria: &SearchCriteria, as_text: bool) -> HttpResponse {
    match engine.search(criteria) {
        Ok(results) => {
            tracing::info!("Returning {} restaurants", results.len());

            if as_text {
                HttpResponse::Ok()
                    .content_type("text/plain; charset=utf-8")
                    .body(format_results(&results))
            } else {
                HttpResponse::Ok().json(SearchResponse::from(results))
            }
        }
        Err(e @ SearchError::InvalidArgument { .. }) => {
            tracing::info!("Rejected search criteria: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid argument", e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};
    use crate::models::Restaurant;

    fn create_engine() -> SearchEngine {
        SearchEngine::new(vec![
            Restaurant::new("Deliciousgenix", 4, 1, 10, "Spanish"),
            Restaurant::new("Herbed Delicious", 3, 7, 40, "Korean"),
        ])
    }

    #[actix_web::test]
    async fn test_run_search_json() {
        let resp = run_search(&create_engine(), &SearchCriteria::new().name("herbed"), false);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let parsed: SearchResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.total_results, 1);
        assert_eq!(parsed.results[0].name, "Herbed Delicious");
    }

    #[actix_web::test]
    async fn test_run_search_text_empty() {
        let resp = run_search(&create_engine(), &SearchCriteria::new().cuisine("thai"), true);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), b"No matches found.\n");
    }

    #[actix_web::test]
    async fn test_run_search_invalid_argument() {
        let resp = run_search(&create_engine(), &SearchCriteria::new().min_rating(6), false);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "Invalid argument");
        assert!(parsed.message.starts_with("rating must be between 1 and 5"));
    }
}
