// Route exports
pub mod recommendations;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};

use crate::error::MatchError;
use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure),
    );
}

impl error::ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    MatchError::InvalidPayload(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    MatchError::InvalidPayload(format!("Invalid query: {}", err)).into()
}

/// JSON and query extractor settings shared by the server and tests
pub fn configure_extractors(cfg: &mut web::ServiceConfig, json_limit: usize) {
    let json_config = web::JsonConfig::default()
        .limit(json_limit)
        .error_handler(handle_json_payload_error);
    let query_config = web::QueryConfig::default().error_handler(handle_query_payload_error);

    cfg.app_data(json_config).app_data(query_config);
}
