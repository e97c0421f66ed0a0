use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    food_analysis::{
        entities::{InlineImage, ModelReply},
        ports::LLMClient,
        schema::get_nutrition_analysis_schema,
    },
};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    json_mode: bool,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl From<GeminiResponse> for ModelReply {
    fn from(response: GeminiResponse) -> Self {
        let segments = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        ModelReply::new(segments)
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(config.timeout).build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            CoreError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            json_mode: config.json_mode,
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<ModelReply, CoreError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model_name);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(gemini_response.into())
    }

    fn generation_config(&self) -> Option<GenerationConfig> {
        self.json_mode.then(|| GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: get_nutrition_analysis_schema(),
        })
    }
}

impl LLMClient for GeminiLLMClient {
    fn model_name(&self) -> String {
        self.model_name.clone()
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image: InlineImage,
    ) -> Result<ModelReply, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type,
                            data: image.data,
                        },
                    },
                ],
            }],
            generation_config: self.generation_config(),
        };

        self.call_gemini_api(request).await
    }
}
