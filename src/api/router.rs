//! Router assembly.

use crate::api::docs::ApiDoc;
use crate::api::handlers::{
    chat_completions, completions, embeddings, health, list_models, metrics_handler, AppState,
};
use crate::core::middleware::{request_id_middleware, MetricsMiddleware};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Page served at `/` when a static root is configured.
pub const INDEX_PAGE: &str = "admin.html";

/// Build the application router.
///
/// When `static_dir` points at an existing directory, `/` serves
/// `admin.html` from it and unmatched paths fall back to files under it.
pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let api_routes = Router::new()
        .route("/v1/models", get(list_models))
        .route("/v1/chat/completions", post(chat_completions))
        .route("/v1/completions", post(completions))
        .route("/v1/embeddings", post(embeddings))
        .layer(axum::middleware::from_fn(MetricsMiddleware::track_metrics))
        .with_state(state);

    let mut router = Router::new()
        .merge(swagger_ui)
        .merge(api_routes)
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    match static_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => {
            tracing::info!("Serving static assets from {}", dir.display());
            router = router
                .route_service("/", ServeFile::new(dir.join(INDEX_PAGE)))
                .fallback_service(ServeDir::new(dir));
        }
        None => {
            if let Some(dir) = static_dir {
                tracing::warn!(
                    "Static directory {} not found, static assets disabled",
                    dir.display()
                );
            }
        }
    }

    router
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
