pub const DEFAULT_LANGUAGE_CODE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeImageInput {
    /// Base64 image payload, forwarded untouched.
    pub image_data: String,
    pub mime_type: String,
    /// Advisory; only used to pick the language of `dish_name`.
    pub language_code: String,
}

impl AnalyzeImageInput {
    pub fn new(
        image_data: impl Into<String>,
        mime_type: impl Into<String>,
        language_code: Option<String>,
    ) -> Self {
        Self {
            image_data: image_data.into(),
            mime_type: mime_type.into(),
            language_code: language_code.unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
        }
    }
}
