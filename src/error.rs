use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::registry::DomainError;

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::InvalidEmailFormat => ApiError::BadRequest(value.to_string()),
            DomainError::MemberNotFound | DomainError::ClassNotFound => {
                ApiError::NotFound(value.to_string())
            }
            DomainError::DuplicateEmail
            | DomainError::AlreadyCheckedIn
            | DomainError::AlreadyCheckedOut
            | DomainError::AlreadyEnrolled
            | DomainError::NotEnrolled
            | DomainError::ClassFull => ApiError::Conflict(value.to_string()),
        }
    }
}
