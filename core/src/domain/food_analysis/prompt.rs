/// Builds the fixed nutritionist instruction sent alongside the image.
pub fn build_analysis_prompt(language_code: &str) -> String {
    format!(
        r#"
As an expert nutritionist, analyze the food image provided.

Your response MUST be a single, valid JSON object, without any markdown formatting, backticks, or other non-JSON text.

Based on the user's language code "{language_code}", the "dish_name" must be in that language.

JSON structure required:
{{
  "dish_name": "[name of the dish in the specified language]",
  "weight": [number, in grams],
  "calories": [number],
  "protein": [number, in grams],
  "fat": [number, in grams],
  "carbs": [number, in grams],
  "ingredients": ["ingredient1", "ingredient2"],
  "usefulness": [a score from 0 to 10 representing the health benefit of this food]
}}
"#
    )
}
