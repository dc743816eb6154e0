// src/web/mod.rs
// HTTP surface: one generate route plus a health check

pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;
pub use types::{GeneratePersonaRequest, GeneratePersonaResponse};

/// Create the web server router
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/generate-persona",
            post(handlers::generate_persona).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
