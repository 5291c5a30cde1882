// Route exports
pub mod restaurants;

use actix_web::{error, http::StatusCode, web, HttpResponse};

pub use restaurants::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(restaurants::configure),
    );
}

/// JSON error response for payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Register the application state and payload error handlers on an app
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes);
    }
}
