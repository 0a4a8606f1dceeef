pub mod products;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{favicon, health_check};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .route("/favicon.ico", get(favicon))
        .route("/health", get(health_check))
}

/// The full application: routes, request tracing and shared state.
pub fn build_app(state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
