//! HTTP routes

pub mod booking;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::{pricing, AppState};

/// Build the application router.
///
/// Anything not matched here is served from the static directory (images,
/// stylesheets and the wasm bundle under `/pkg`).
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/workshops", get(pages::workshops))
        .route("/booking", get(pages::booking))
        .route("/book", post(booking::book))
        .route("/test-book", post(booking::test_book))
        .route("/test-email", post(booking::test_email))
        .route("/health", get(health::health))
        .nest("/api/pricing", pricing::router())
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
