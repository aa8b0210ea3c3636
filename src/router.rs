use crate::handlers::{market, order};
use crate::state::AppState;
use axum::{routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Routing table for the intake surface. Non-POST methods on either path
/// fall through to axum's 405 response without touching a handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/market", post(market::create_market))
        .route("/order", post(order::create_order))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
