use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutrilens_core::domain::common::entities::app_errors::{
    CoreError, INVALID_UPSTREAM_STRUCTURE_DETAILS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const INTERNAL_SERVER_ERROR_LABEL: &str = "Internal Server Error";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";
const UNEXPECTED_ERROR_DETAILS: &str = "An unexpected error occurred.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    MethodNotAllowed,

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Internal Server Error: {details}")]
    InternalServerError {
        details: String,
        raw_response: Option<String>,
    },
}

impl ApiError {
    pub fn internal(details: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            details: details.into(),
            raw_response: None,
        }
    }
}

/// Error body shared by every failing response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Untouched model text, present when it could not be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse {
                    error: message,
                    details: None,
                    raw_response: None,
                },
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ApiErrorResponse {
                    error: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
                    details: None,
                    raw_response: None,
                },
            ),
            ApiError::PayloadTooLarge(message) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ApiErrorResponse {
                    error: message,
                    details: None,
                    raw_response: None,
                },
            ),
            ApiError::InternalServerError {
                details,
                raw_response,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorResponse {
                    error: INTERNAL_SERVER_ERROR_LABEL.to_string(),
                    details: Some(details),
                    raw_response,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidUpstreamResponse => {
                ApiError::internal(INVALID_UPSTREAM_STRUCTURE_DETAILS)
            }
            CoreError::UnparseableModelOutput {
                details,
                raw_response,
            } => ApiError::InternalServerError {
                details,
                raw_response: Some(raw_response),
            },
            CoreError::ExternalServiceError(message) => ApiError::internal(message),
            CoreError::InvalidConfiguration(message) => ApiError::internal(message),
            CoreError::InternalServerError => ApiError::internal(UNEXPECTED_ERROR_DETAILS),
        }
    }
}
