//! Routing module for the storefront application

use crate::cart::state::SharedState;
use crate::error::Result;
use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Html,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log failed requests (TraceLayer covers the rest)
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::info!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .route("/", get(storefront_page))
        .merge(crate::cart::routes())
        .merge(crate::order::routes())
        .layer(log_layer)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: GET /
/// Serves the storefront page.
async fn storefront_page(State(state): State<SharedState>) -> Result<Html<String>> {
    state.load_storefront_html().await.map(Html)
}
