use std::sync::{Arc, OnceLock};

use crate::application::http::food_analysis::router::food_analysis_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::api_doc;
use crate::args::Args;

use anyhow::Context;
use axum::Json;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use nutrilens_core::{application::create_service, domain::common::NutrilensConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span};
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let nutrilens_config: NutrilensConfig = NutrilensConfig::from(args.as_ref().clone());
    let service = create_service(nutrilens_config).await?;

    Ok(AppState::new(args, service))
}

static METRICS: OnceLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> = OnceLock::new();

/// The Prometheus recorder is process-global and can only be installed once.
fn metrics_pair() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    METRICS.get_or_init(PrometheusMetricLayer::pair).clone()
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let allow_origin = if allowed_origins.iter().any(|origin| origin.trim() == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .with_context(|| format!("invalid allowed origin: {origin}"))
            })
            .collect::<Result<Vec<HeaderValue>, anyhow::Error>>()?;
        AllowOrigin::list(origins)
    };

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]))
}

///  Returns the [`Router`](axum::Router) of this application.
pub fn router(state: AppState) -> Result<axum::Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let openapi_json = openapi.clone();

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .route(
            &api_docs_url,
            get(|| async move { Json(openapi_json) }),
        )
        .merge(food_analysis_routes(state.clone()))
        .merge(health_routes(&root_path));

    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = metrics_pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router
        .layer(DefaultBodyLimit::max(state.args.server.max_body_bytes))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
