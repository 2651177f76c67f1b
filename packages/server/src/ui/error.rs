//! API error type mapping use case failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::{RepositoryError, ValidationErrors},
    usecase::{HeartbeatError, ListMessagesError, PostMessageError, RegisterError},
};

/// Body returned for store failures; details only go to the log.
const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input, answered with the list of field messages (422)
    Validation(ValidationErrors),
    /// Participant name already taken (409)
    Conflict(String),
    /// Caller is not a registered participant (404)
    NotFound(String),
    /// Store failure (500)
    Internal(RepositoryError),
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::Internal(e)
    }
}

impl From<RegisterError> for ApiError {
    fn from(e: RegisterError) -> Self {
        match e {
            RegisterError::Validation(errors) => ApiError::Validation(errors),
            RegisterError::NameTaken(name) => {
                ApiError::Conflict(format!("Name '{name}' is already taken"))
            }
            RegisterError::Repository(e) => ApiError::Internal(e),
        }
    }
}

impl From<PostMessageError> for ApiError {
    fn from(e: PostMessageError) -> Self {
        match e {
            PostMessageError::Validation(errors) => ApiError::Validation(errors),
            PostMessageError::Repository(e) => ApiError::Internal(e),
        }
    }
}

impl From<ListMessagesError> for ApiError {
    fn from(e: ListMessagesError) -> Self {
        match e {
            ListMessagesError::Validation(errors) => ApiError::Validation(errors),
            ListMessagesError::Repository(e) => ApiError::Internal(e),
        }
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(e: HeartbeatError) -> Self {
        match e {
            HeartbeatError::NotRegistered(name) => {
                ApiError::NotFound(format!("Participant '{name}' is not registered"))
            }
            HeartbeatError::Repository(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors.messages())).into_response()
            }
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}
