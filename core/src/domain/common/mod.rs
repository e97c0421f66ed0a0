use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout: Duration,
    /// Ask the model for `application/json` output constrained by the nutrition schema.
    pub json_mode: bool,
}

// The API key must never end up in logs.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("timeout", &self.timeout)
            .field("json_mode", &self.json_mode)
            .finish()
    }
}

impl LLMConfig {
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: DEFAULT_LLM_TIMEOUT,
            json_mode: false,
        }
    }
}
