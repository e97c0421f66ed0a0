use crate::{
    domain::common::{NutrilensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type NutrilensService = Service<GeminiLLMClient>;

/// Builds the process-wide service once at startup.
pub async fn create_service(config: NutrilensConfig) -> Result<NutrilensService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::InvalidConfiguration(
            "Gemini API key must not be empty".to_string(),
        ));
    }

    let llm_client = GeminiLLMClient::new(&config.llm)?;

    tracing::debug!("LLM client configured: {:?}", config.llm);

    Ok(Service::new(llm_client))
}
