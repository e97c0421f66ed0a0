use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use nutrilens_core::domain::food_analysis::value_objects::AnalyzeImageInput;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing imageData or mimeType";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Base64 encoded image. `imageBase64` is accepted as well.
    #[serde(default, alias = "imageBase64")]
    #[validate(required, length(min = 1))]
    pub image_data: Option<String>,

    #[serde(default)]
    #[schema(example = "image/jpeg")]
    #[validate(required, length(min = 1))]
    pub mime_type: Option<String>,

    /// Language of the returned `dish_name`, defaults to `en`. Non-string values are ignored.
    #[serde(default, deserialize_with = "string_or_none")]
    #[schema(example = "en")]
    pub language_code: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

/// The two accepted body shapes: fields nested under `data`, or at the top level.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AnalysisRequestEnvelope {
    Wrapped { data: AnalysisRequest },
    Bare(AnalysisRequest),
}

impl AnalysisRequestEnvelope {
    pub fn into_request(self) -> AnalysisRequest {
        match self {
            AnalysisRequestEnvelope::Wrapped { data } => data,
            AnalysisRequestEnvelope::Bare(request) => request,
        }
    }
}

impl AnalysisRequest {
    /// Resolves either body shape; anything unrecognizable counts as an empty request.
    pub fn from_body(body: Value) -> Self {
        serde_json::from_value::<AnalysisRequestEnvelope>(body)
            .map(AnalysisRequestEnvelope::into_request)
            .unwrap_or_default()
    }

    pub fn into_input(self) -> Result<AnalyzeImageInput, ApiError> {
        if let Err(errors) = self.validate() {
            tracing::error!("Missing imageData or mimeType in request body: {}", errors);
            return Err(ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()));
        }

        match (self.image_data, self.mime_type) {
            (Some(image_data), Some(mime_type)) => Ok(AnalyzeImageInput::new(
                image_data,
                mime_type,
                self.language_code,
            )),
            _ => Err(ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// Extracts and validates an analysis request from a JSON body of either shape.
pub struct ValidatedAnalysisRequest(pub AnalyzeImageInput);

impl<S> FromRequest<S> for ValidatedAnalysisRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(ApiError::PayloadTooLarge(rejection.body_text()));
            }
            Err(rejection) => {
                tracing::debug!("Request body is not usable JSON: {}", rejection.body_text());
                Value::Null
            }
        };

        AnalysisRequest::from_body(body)
            .into_input()
            .map(ValidatedAnalysisRequest)
    }
}
