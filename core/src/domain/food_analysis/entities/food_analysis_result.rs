use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Nutrition facts for one dish, keyed the way the analysis prompt asks the model to key them.
///
/// The endpoint passes the model's object through untouched; this typed view only
/// documents the expected shape and feeds structured logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    #[schema(example = "Greek salad")]
    pub dish_name: String,
    #[serde(rename = "weight")]
    #[schema(example = 250)]
    pub weight_grams: f64,
    #[schema(example = 320)]
    pub calories: f64,
    #[serde(rename = "protein")]
    pub protein_grams: f64,
    #[serde(rename = "fat")]
    pub fat_grams: f64,
    #[serde(rename = "carbs")]
    pub carbs_grams: f64,
    pub ingredients: Vec<String>,
    /// Health benefit score between 0 and 10.
    #[serde(rename = "usefulness")]
    #[schema(minimum = 0, maximum = 10)]
    pub usefulness_score: f64,
}

impl AnalysisResult {
    /// Reads the typed view out of a normalized model object, if it has the expected shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}
