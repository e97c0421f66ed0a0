use thiserror::Error;

/// Detail message returned when the model reply carries no usable text.
pub const INVALID_UPSTREAM_STRUCTURE_DETAILS: &str = "Received invalid response structure from AI.";

/// Detail message returned when the model text cannot be recovered as JSON.
pub const UNPARSEABLE_OUTPUT_DETAILS: &str = "Failed to parse JSON response from AI.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{}", INVALID_UPSTREAM_STRUCTURE_DETAILS)]
    InvalidUpstreamResponse,

    #[error("{details}")]
    UnparseableModelOutput {
        details: String,
        raw_response: String,
    },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal server error")]
    InternalServerError,
}
