use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{InlineImage, ModelReply},
        value_objects::AnalyzeImageInput,
    },
};

/// LLM Client trait for calling multimodal AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn model_name(&self) -> String;

    fn generate_with_image(
        &self,
        prompt: String,
        image: InlineImage,
    ) -> impl Future<Output = Result<ModelReply, CoreError>> + Send;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// Runs one image through the model and returns the recovered JSON object as-is.
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}
