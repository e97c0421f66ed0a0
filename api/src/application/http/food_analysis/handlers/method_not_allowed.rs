use axum::http::Method;

use crate::application::http::server::api_entities::api_error::ApiError;

pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::warn!("Received {} request, expected POST.", method);
    ApiError::MethodNotAllowed
}
