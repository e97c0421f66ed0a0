use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    method_not_allowed::method_not_allowed,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_image))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyzeImage", state.args.server.root_path),
        post(analyze_image).fallback(method_not_allowed),
    )
}
