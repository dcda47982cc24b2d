//! MongoDB-backed product store.
//!
//! Thin adapter over the official driver: filters are rendered by
//! [`filter_document`], results are decoded by [`normalize_document`].

use bson::{doc, Document};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{options::FindOptions, Client, Collection, Database};

use meer_core::ProductId;
use meer_products::{NewProduct, Product, ProductFilter};

use super::normalize::{normalize_document, storage_document};
use super::query::filter_document;
use super::{ProductStore, StoreError};

/// Product collection in a MongoDB database.
///
/// ## Connection handling
///
/// The driver's `Client` owns a connection pool and is cheap to clone; one
/// store is built at startup and shared behind an `Arc`. The driver connects
/// lazily, so an unreachable server surfaces on the first query, not here.
#[derive(Debug, Clone)]
pub struct MongoProductStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoProductStore {
    pub fn new(database: Database, collection: &str) -> Self {
        Self {
            collection: database.collection::<Document>(collection),
            database,
        }
    }

    /// Build a client from a connection string and bind to `database.collection`.
    pub async fn connect(url: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| map_mongo_error("connect", e))?;
        Ok(Self::new(client.database(database), collection))
    }
}

fn map_mongo_error(operation: &'static str, err: mongodb::error::Error) -> StoreError {
    tracing::debug!(operation, error = %err, "mongodb operation failed");
    StoreError::Driver {
        operation,
        message: err.to_string(),
    }
}

#[async_trait::async_trait]
impl ProductStore for MongoProductStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    fn database_name(&self) -> Option<&str> {
        Some(self.database.name())
    }

    async fn find(
        &self,
        filter: &ProductFilter,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, StoreError> {
        let options = FindOptions::builder()
            .limit(limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX)))
            .build();

        let cursor = self
            .collection
            .find(filter_document(filter), options)
            .await
            .map_err(|e| map_mongo_error("find", e))?;
        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| map_mongo_error("find", e))?;

        docs.into_iter().map(normalize_document).collect()
    }

    async fn find_one(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let oid = *id.as_object_id();
        let found = self
            .collection
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| map_mongo_error("find_one", e))?;
        found.map(normalize_document).transpose()
    }

    async fn insert(&self, product: NewProduct) -> Result<ProductId, StoreError> {
        let id = ProductId::generate();
        let doc = storage_document(id, &product, Utc::now())?;
        self.collection
            .insert_one(doc, None)
            .await
            .map_err(|e| map_mongo_error("insert_one", e))?;
        Ok(id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.database
            .list_collection_names(None)
            .await
            .map_err(|e| map_mongo_error("list_collection_names", e))
    }
}
