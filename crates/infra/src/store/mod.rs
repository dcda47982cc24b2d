//! Document store boundary for the product collection.
//!
//! Stores speak BSON documents internally and hand typed `Product` records to
//! callers. Every document read passes through [`normalize_document`], so the
//! store-native `_id` never escapes this module.

pub mod in_memory;
#[cfg(feature = "mongo")]
pub mod mongo;
pub mod normalize;
pub mod query;

use std::sync::Arc;

use meer_core::ProductId;
use meer_products::{NewProduct, Product, ProductFilter};
use thiserror::Error;

pub use in_memory::InMemoryProductStore;
#[cfg(feature = "mongo")]
pub use mongo::MongoProductStore;
pub use normalize::{normalize_document, storage_document};
pub use query::filter_document;

/// Collection name used when none is configured.
pub const DEFAULT_COLLECTION: &str = "product";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store operation `{operation}` failed: {message}")]
    Driver {
        operation: &'static str,
        message: String,
    },

    #[error("failed to encode document: {0}")]
    Encode(String),

    #[error("malformed stored document: {0}")]
    Malformed(String),
}

/// Product collection access.
///
/// Implementations must assign the identifier on insert and must return
/// documents in their natural (insertion) order.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Short backend label for diagnostics (`"mongodb"`, `"in-memory"`).
    fn backend(&self) -> &'static str;

    /// Name of the connected database, for backends that have one.
    fn database_name(&self) -> Option<&str> {
        None
    }

    async fn find(
        &self,
        filter: &ProductFilter,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, StoreError>;

    async fn find_one(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    async fn insert(&self, product: NewProduct) -> Result<ProductId, StoreError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}

#[async_trait::async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn database_name(&self) -> Option<&str> {
        (**self).database_name()
    }

    async fn find(
        &self,
        filter: &ProductFilter,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, StoreError> {
        (**self).find(filter, limit).await
    }

    async fn find_one(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_one(id).await
    }

    async fn insert(&self, product: NewProduct) -> Result<ProductId, StoreError> {
        (**self).insert(product).await
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        (**self).list_collection_names().await
    }
}
