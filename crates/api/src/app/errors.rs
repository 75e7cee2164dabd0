use axum::http::StatusCode;
use axum::response::IntoResponse;

use usuarios_core::DomainError;

use crate::app::dto::MessageResponse;

pub const USER_NOT_FOUND: &str = "User not found";
pub const MISSING_USER_DATA: &str = "Missing user data";
pub const INVALID_BODY: &str = "Invalid request body";
pub const INVALID_USER_NAME: &str = "Invalid user name";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(_) => json_error(StatusCode::BAD_REQUEST, MISSING_USER_DATA),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, USER_NOT_FOUND),
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(MessageResponse::new(message))).into_response()
}
