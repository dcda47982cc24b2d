use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use meer_products::nike_catalog;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/seed", post(seed_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let catalog = match services.catalog() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match catalog.list(&params.into_filter()).await {
        Ok(items) => (StatusCode::OK, Json(dto::ProductListResponse { items })).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let catalog = match services.catalog() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match catalog.get(&id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// Load the fixed Nike catalog; records whose title already exists are skipped.
pub async fn seed_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let catalog = match services.catalog() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match catalog.seed(&nike_catalog()).await {
        Ok(report) => {
            (StatusCode::OK, Json(dto::SeedResponse::complete(report.created))).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}
