// Route exports
pub mod screening;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use crate::models::ErrorResponse;

pub use screening::AppState;

/// Worst-case JSON size of one character: a surrogate pair written as two `\uXXXX` escapes
const MAX_JSON_BYTES_PER_CHAR: usize = 12;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(screening::configure),
    );
}

/// JSON error response for payload errors
#[derive(Debug)]
pub struct JsonError(pub ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError(ErrorResponse::new("invalid_json", format!("Invalid JSON: {}", err), 400)).into()
}

/// Handle path payload errors
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError(ErrorResponse::new("invalid_path", format!("Invalid path: {}", err), 400)).into()
}

/// Request body limit in bytes for a resume limit in characters
///
/// Any resume within `max_resume_chars` fits, however it is escaped, so the
/// character check in the handler is the one that reports oversized resumes.
pub fn json_body_limit(max_resume_chars: usize) -> usize {
    max_resume_chars
        .saturating_mul(MAX_JSON_BYTES_PER_CHAR)
        .saturating_add(64 * 1024)
}

/// JSON extractor config with the service's error body and size limit
pub fn json_config(max_resume_chars: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(json_body_limit(max_resume_chars))
        .error_handler(handle_json_payload_error)
}

/// Path extractor config with the service's error body
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(handle_path_error)
}
