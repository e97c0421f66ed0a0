use crate::domain::food_analysis::ports::LLMClient;

/// Application service; every domain service trait is implemented on it.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
