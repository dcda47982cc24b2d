use std::sync::Arc;

use meer_infra::{AppConfig, DatabaseEnv, InMemoryProductStore, ProductCatalog, StoreConfig};

use crate::app::errors;

/// Services shared by every handler (injected via `Extension`).
///
/// `catalog` is `None` when no document store was configured; catalog routes
/// then answer with a "Database not configured" error instead of panicking.
#[derive(Clone)]
pub struct AppServices {
    catalog: Option<ProductCatalog>,
    database_env: DatabaseEnv,
}

impl AppServices {
    pub fn new(catalog: Option<ProductCatalog>) -> Self {
        Self {
            catalog,
            database_env: DatabaseEnv::default(),
        }
    }

    pub fn with_database_env(mut self, database_env: DatabaseEnv) -> Self {
        self.database_env = database_env;
        self
    }

    /// Services backed by a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Some(ProductCatalog::new(Arc::new(InMemoryProductStore::new()))))
    }

    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn catalog(&self) -> Result<&ProductCatalog, axum::response::Response> {
        self.catalog.as_ref().ok_or_else(errors::database_not_configured)
    }

    pub fn database_env(&self) -> DatabaseEnv {
        self.database_env
    }
}

/// Select and build the store described by `config`.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let services = build_store(&config.store).await?;
    Ok(services.with_database_env(config.database_env))
}

async fn build_store(config: &StoreConfig) -> anyhow::Result<AppServices> {
    match config {
        #[cfg(feature = "mongo")]
        StoreConfig::Mongo {
            url,
            database,
            collection,
        } => {
            let store = meer_infra::MongoProductStore::connect(url, database, collection).await?;
            tracing::info!(database = %database, collection = %collection, "using mongodb product store");
            Ok(AppServices::new(Some(ProductCatalog::new(Arc::new(store)))))
        }
        #[cfg(not(feature = "mongo"))]
        StoreConfig::Mongo { collection, .. } => {
            tracing::warn!("DATABASE_URL set but mongo feature not enabled, falling back to in-memory");
            Ok(in_memory(collection))
        }
        StoreConfig::InMemory { collection } => {
            tracing::info!(collection = %collection, "using in-memory product store");
            Ok(in_memory(collection))
        }
        StoreConfig::Unconfigured => {
            tracing::warn!("no document store configured; catalog endpoints will return 500");
            Ok(AppServices::unconfigured())
        }
    }
}

fn in_memory(collection: &str) -> AppServices {
    let store = InMemoryProductStore::with_collection(collection);
    AppServices::new(Some(ProductCatalog::new(Arc::new(store))))
}
