//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod docs;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub const HEALTH_PATH: &str = "/";
pub const LOGS_PATH: &str = "/api/logs";
pub const DOCS_PATH: &str = "/api-docs";

/// Build the API router using the provided application state.
///
/// Every route is GET-only. Other methods on a known path fall through to
/// the same 404 as unknown paths.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            HEALTH_PATH,
            get(handlers::health).fallback(handlers::not_found),
        )
        .route(LOGS_PATH, get(handlers::logs).fallback(handlers::not_found))
        .route(DOCS_PATH, get(handlers::docs).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
