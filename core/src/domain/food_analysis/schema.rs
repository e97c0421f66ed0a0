use serde_json::json;

/// Returns the JSON schema for nutrition analysis LLM responses
pub fn get_nutrition_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dish_name": { "type": "string" },
            "weight": { "type": "number" },
            "calories": { "type": "number" },
            "protein": { "type": "number" },
            "fat": { "type": "number" },
            "carbs": { "type": "number" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "usefulness": {
                "type": "number",
                "minimum": 0,
                "maximum": 10
            }
        },
        "required": [
            "dish_name", "weight", "calories", "protein",
            "fat", "carbs", "ingredients", "usefulness"
        ]
    })
}
