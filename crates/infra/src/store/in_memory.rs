use std::sync::RwLock;

use bson::{Bson, Document};
use chrono::Utc;

use meer_core::ProductId;
use meer_products::{NewProduct, Product, ProductFilter};

use super::normalize::{normalize_document, storage_document, INTERNAL_ID_FIELD};
use super::{ProductStore, StoreError, DEFAULT_COLLECTION};

/// In-memory product collection.
///
/// Intended for tests/dev. Documents are kept in insertion order in the same
/// BSON shape the MongoDB store writes, and go through the same normalizer on
/// the way out.
#[derive(Debug)]
pub struct InMemoryProductStore {
    collection: String,
    docs: RwLock<Vec<Document>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::with_collection(DEFAULT_COLLECTION)
    }

    pub fn with_collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            docs: RwLock::new(Vec::new()),
        }
    }

    /// Insert a raw document as-is (tests use this to plant odd shapes).
    pub fn insert_raw(&self, doc: Document) -> Result<(), StoreError> {
        self.docs.write().map_err(|_| poisoned("insert_raw"))?.push(doc);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.docs.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Result<Vec<Document>, StoreError> {
        self.docs
            .read()
            .map(|docs| docs.clone())
            .map_err(|_| poisoned("read"))
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(operation: &'static str) -> StoreError {
    StoreError::Driver {
        operation,
        message: "in-memory store lock poisoned".to_string(),
    }
}

/// Missing or non-string fields compare as empty, which no non-empty predicate matches.
fn matches_document(filter: &ProductFilter, doc: &Document) -> bool {
    let text = |key: &str| doc.get_str(key).unwrap_or_default();
    filter.matches_fields(text("title"), text("description"), text("brand"))
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    fn backend(&self) -> &'static str {
        "in-memory"
    }

    async fn find(
        &self,
        filter: &ProductFilter,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, StoreError> {
        // Match on the raw document like the server does, so only hits are decoded.
        let mut out = Vec::new();
        for doc in self.snapshot()? {
            if limit.is_some_and(|l| out.len() >= l) {
                break;
            }
            if matches_document(filter, &doc) {
                out.push(normalize_document(doc)?);
            }
        }
        Ok(out)
    }

    async fn find_one(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let wanted = Bson::ObjectId(*id.as_object_id());
        let found = self
            .snapshot()?
            .into_iter()
            .find(|doc| doc.get(INTERNAL_ID_FIELD) == Some(&wanted));
        found.map(normalize_document).transpose()
    }

    async fn insert(&self, product: NewProduct) -> Result<ProductId, StoreError> {
        let id = ProductId::generate();
        let doc = storage_document(id, &product, Utc::now())?;
        self.docs.write().map_err(|_| poisoned("insert"))?.push(doc);
        Ok(id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        // Collections only exist once something has been written to them.
        if self.is_empty() {
            Ok(vec![])
        } else {
            Ok(vec![self.collection.clone()])
        }
    }
}
