//! Custom error types for the users API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::RepositoryError;
use serde_json::json;
use thiserror::Error;

use crate::{representation::Representation, validation::ValidationErrors};

/// Custom error type for the users API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed body, or an invalid identifier
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// One or more fields failed validation, reported in the negotiated
    /// representation
    #[error("Validation failed")]
    ValidationFailed(ValidationErrors, Representation),

    /// No record for the requested identifier or page
    #[error("Not found")]
    NotFound,

    /// No representation acceptable to the client
    #[error("Not acceptable")]
    NotAcceptable,

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::ValidationFailed(errors, representation) => {
                return representation
                    .render(StatusCode::UNPROCESSABLE_ENTITY, "ValidationErrors", &errors)
                    .unwrap_or_else(IntoResponse::into_response);
            }
            ApiError::NotAcceptable => return StatusCode::NOT_ACCEPTABLE.into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Repository(RepositoryError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("User {id} not found"))
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl ApiError {
    /// Report `errors` in whatever representation the request accepts, or
    /// refuse with 406 when it accepts none
    pub fn validation(errors: ValidationErrors, representation: ApiResult<Representation>) -> Self {
        match representation {
            Ok(representation) => ApiError::ValidationFailed(errors, representation),
            Err(e) => e,
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
