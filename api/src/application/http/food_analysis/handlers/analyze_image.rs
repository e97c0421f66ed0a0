use axum::extract::State;
use nutrilens_core::domain::food_analysis::{
    entities::AnalysisResult, ports::FoodAnalysisService,
};

use crate::application::http::{
    food_analysis::validators::{AnalysisRequestEnvelope, ValidatedAnalysisRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyzeImage",
    tag = "food-analysis",
    summary = "Analyze food image",
    description = "Sends a base64 food image to the vision model and returns the nutrition object it produced. The object is passed through as emitted by the model.",
    request_body = AnalysisRequestEnvelope,
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse, description = "Missing imageData or mimeType"),
        (status = 405, body = ApiErrorResponse, description = "Method Not Allowed"),
        (status = 500, body = ApiErrorResponse, description = "Upstream or parsing failure"),
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    ValidatedAnalysisRequest(input): ValidatedAnalysisRequest,
) -> Result<Response<serde_json::Value>, ApiError> {
    let result = state
        .service
        .analyze_image(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
