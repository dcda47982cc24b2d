use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use meer_infra::CatalogError;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::InvalidId(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", "Invalid product id")
        }
        CatalogError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "Product not found"),
        CatalogError::Validation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
        }
        CatalogError::Store(e) => {
            tracing::warn!(error = %e, "catalog store operation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

/// No document store was configured at startup.
pub fn database_not_configured() -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "database_not_configured",
        "Database not configured",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
