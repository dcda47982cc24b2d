//! Infrastructure layer: configuration, document store adapters, catalog service.

pub mod catalog;
pub mod config;
pub mod store;

pub use catalog::{CatalogError, ProductCatalog, SeedReport};
pub use config::{AppConfig, ConfigError, DatabaseEnv, StoreConfig};
pub use store::{InMemoryProductStore, ProductStore, StoreError};
#[cfg(feature = "mongo")]
pub use store::MongoProductStore;
