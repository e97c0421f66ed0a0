use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::{AnalysisResult, InlineImage},
        normalizer::normalize_reply,
        ports::{FoodAnalysisService, LLMClient},
        prompt::build_analysis_prompt,
        value_objects::AnalyzeImageInput,
    },
};

const LOG_PREVIEW_CHARS: usize = 300;

impl<LLM> FoodAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<serde_json::Value, CoreError> {
        tracing::info!(
            language_code = %input.language_code,
            image_chars = input.image_data.len(),
            mime_type = %input.mime_type,
            "Analysis request received"
        );

        // 1. Build prompt
        let prompt = build_analysis_prompt(&input.language_code);

        // 2. Call LLM
        tracing::info!(model = %self.llm_client.model_name(), "Sending request to LLM");
        let reply = self
            .llm_client
            .generate_with_image(prompt, InlineImage::new(input.mime_type, input.image_data))
            .await?;

        if let Some(text) = reply.text() {
            tracing::debug!(
                "Response text from LLM (start): {}...",
                text.chars().take(LOG_PREVIEW_CHARS).collect::<String>()
            );
        }

        // 3. Recover the JSON object
        let normalized = normalize_reply(&reply).map_err(|e| {
            match &e {
                CoreError::InvalidUpstreamResponse => {
                    tracing::error!("LLM returned an empty or invalid response structure: {:?}", reply)
                }
                CoreError::UnparseableModelOutput { raw_response, .. } => {
                    tracing::error!("Failed to parse JSON from LLM response. Original text: {}", raw_response)
                }
                _ => {}
            }
            e
        })?;

        tracing::info!(recovery = ?normalized.recovery, "LLM response parsed successfully");

        // 4. Log what was recognized; the object itself is returned untouched
        match AnalysisResult::from_value(&normalized.value) {
            Some(result) => tracing::info!(
                dish_name = %result.dish_name,
                calories = result.calories,
                usefulness = result.usefulness_score,
                "Dish recognized"
            ),
            None => tracing::warn!("LLM response does not match the expected nutrition shape"),
        }

        Ok(normalized.value)
    }
}
