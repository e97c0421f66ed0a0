use crate::application::http::{food_analysis::router::FoodAnalysisApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutrilens API",
        description = "Nutrition facts from a single food photo"
    ),
    tags(
        (name = "food-analysis", description = "Food image analysis"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Full document with every router's paths merged in.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(FoodAnalysisApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
