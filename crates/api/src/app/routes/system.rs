use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};

use crate::app::dto;
use crate::app::services::AppServices;

const MAX_LISTED_COLLECTIONS: usize = 10;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn root() -> Json<dto::MessageResponse> {
    Json(dto::MessageResponse {
        message: "Meer Shoes backend is running",
    })
}

pub async fn hello() -> Json<dto::MessageResponse> {
    Json(dto::MessageResponse {
        message: "Hello from Meer Shoes API!",
    })
}

/// Report whether the document store is configured and reachable.
///
/// Always 200: failures are described in the body.
pub async fn diagnostics(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<dto::DiagnosticsResponse> {
    let env = services.database_env();
    let mut body = dto::DiagnosticsResponse {
        backend: "running",
        database: "not configured".to_string(),
        database_url: dto::set_or_not(env.url_set),
        database_name: dto::set_or_not(env.name_set),
        connected_database: None,
        store: None,
        connection_status: "Not Connected",
        collections: vec![],
    };

    let Ok(catalog) = services.catalog() else {
        return Json(body);
    };

    let store = catalog.store();
    body.store = Some(store.backend());
    body.connected_database = store.database_name().map(str::to_string);

    match catalog.collection_names().await {
        Ok(mut collections) => {
            collections.truncate(MAX_LISTED_COLLECTIONS);
            body.database = "connected".to_string();
            body.connection_status = "Connected";
            body.collections = collections;
        }
        Err(e) => {
            tracing::warn!(error = %e, "store diagnostics failed");
            body.database = format!("error: {e}");
            body.connection_status = "Error";
        }
    }
    Json(body)
}
