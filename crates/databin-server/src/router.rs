use std::path::Path;
use std::sync::Arc;

use axum::http::header::{self, HeaderName};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use databin_store::DocumentStore;

use crate::handler;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

/// Build the axum router: the `/data` resource, static assets for every
/// other path, permissive CORS and request tracing on every response.
///
/// Unsupported methods on `/data` get 405 from the method router; paths with
/// no matching asset get 404 from the static file service.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]);

    Router::new()
        .route(
            "/data",
            get(handler::get_document)
                .post(handler::post_document)
                .put(handler::put_document),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
