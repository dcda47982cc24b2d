use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for every endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/test", get(system::diagnostics))
        .route("/api/hello", get(system::hello))
        .nest("/api/products", products::router())
}
