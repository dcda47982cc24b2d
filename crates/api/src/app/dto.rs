use serde::{Deserialize, Serialize};

use meer_products::{Product, ProductFilter};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub brand: Option<String>,
    pub q: Option<String>,
}

impl ListProductsQuery {
    pub fn into_filter(self) -> ProductFilter {
        ProductFilter::from_params(self.brand, self.q)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    pub created: u64,
}

impl SeedResponse {
    pub fn complete(created: u64) -> Self {
        Self {
            message: "Seed complete",
            created,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body of the `/test` store diagnostics endpoint.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    /// Whether `DATABASE_URL` was given.
    pub database_url: &'static str,
    /// Whether `DATABASE_NAME` was given.
    pub database_name: &'static str,
    pub connected_database: Option<String>,
    pub store: Option<&'static str>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

pub fn set_or_not(present: bool) -> &'static str {
    if present { "set" } else { "not set" }
}
