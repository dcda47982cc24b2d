//! Catalog use-cases on top of a `ProductStore`: list, lookup, seed.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use meer_core::{DomainError, ProductId};
use meer_products::{NewProduct, Product, ProductFilter};

use crate::store::{ProductStore, StoreError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid product id: {0}")]
    InvalidId(String),

    #[error("product not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(msg) => CatalogError::InvalidId(msg),
            DomainError::NotFound => CatalogError::NotFound,
            DomainError::Validation(msg) => CatalogError::Validation(msg),
        }
    }
}

/// Outcome of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub created: u64,
    pub skipped: u64,
}

/// Product catalog service.
///
/// Holds the injected store handle; cloning shares the same store.
#[derive(Clone)]
pub struct ProductCatalog {
    store: Arc<dyn ProductStore>,
}

impl ProductCatalog {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ProductStore> {
        &self.store
    }

    /// Products matching `filter`, in store order.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.find(filter, None).await?)
    }

    /// Look a product up by its public identifier.
    ///
    /// A string that is not a well-formed identifier is `InvalidId`, never `NotFound`.
    pub async fn get(&self, raw_id: &str) -> Result<Product, CatalogError> {
        let id: ProductId = raw_id.parse()?;
        self.store
            .find_one(&id)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    /// Insert every candidate whose title is not in the store yet.
    ///
    /// Runs candidate by candidate without a surrounding transaction: an error
    /// leaves earlier inserts in place, and re-running only adds what is missing.
    /// Two concurrent runs may both insert the same title.
    pub async fn seed(&self, candidates: &[NewProduct]) -> Result<SeedReport, CatalogError> {
        let mut report = SeedReport::default();

        for candidate in candidates {
            let existing = self
                .store
                .find(&ProductFilter::title(candidate.title.as_str()), Some(1))
                .await?;
            if !existing.is_empty() {
                debug!(title = %candidate.title, "seed: already present");
                report.skipped += 1;
                continue;
            }

            candidate.validate()?;
            let id = self.store.insert(candidate.clone()).await?;
            debug!(title = %candidate.title, %id, "seed: created");
            report.created += 1;
        }

        info!(
            backend = self.store.backend(),
            created = report.created,
            skipped = report.skipped,
            "seed complete"
        );
        Ok(report)
    }

    /// Names of the collections in the backing database.
    pub async fn collection_names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.store.list_collection_names().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use meer_products::{nike_catalog, Rating};

    use crate::store::InMemoryProductStore;

    fn catalog() -> (ProductCatalog, Arc<InMemoryProductStore>) {
        let store = Arc::new(InMemoryProductStore::new());
        (ProductCatalog::new(store.clone()), store)
    }

    /// Store wrapper whose inserts start failing after a budget is used up.
    struct FlakyStore {
        inner: InMemoryProductStore,
        inserts_left: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ProductStore for FlakyStore {
        fn backend(&self) -> &'static str {
            "flaky"
        }

        async fn find(
            &self,
            filter: &ProductFilter,
            limit: Option<usize>,
        ) -> Result<Vec<Product>, StoreError> {
            self.inner.find(filter, limit).await
        }

        async fn find_one(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
            self.inner.find_one(id).await
        }

        async fn insert(&self, product: NewProduct) -> Result<ProductId, StoreError> {
            let left = self.inserts_left.load(Ordering::SeqCst);
            if left == 0 {
                return Err(StoreError::Driver {
                    operation: "insert",
                    message: "connection reset".to_string(),
                });
            }
            self.inserts_left.store(left - 1, Ordering::SeqCst);
            self.inner.insert(product).await
        }

        async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
            self.inner.list_collection_names().await
        }
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let (catalog, store) = catalog();
        let candidates = nike_catalog();

        let first = catalog.seed(&candidates).await.unwrap();
        assert_eq!(first, SeedReport { created: 3, skipped: 0 });

        let second = catalog.seed(&candidates).await.unwrap();
        assert_eq!(second, SeedReport { created: 0, skipped: 3 });
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn seed_only_adds_missing_titles() {
        let (catalog, store) = catalog();
        let mut candidates = nike_catalog();
        store.insert(candidates[1].clone()).await.unwrap();

        let report = catalog.seed(&candidates).await.unwrap();
        assert_eq!(report.created, 2);
        assert_eq!(store.len(), 3);

        candidates.truncate(1);
        assert_eq!(catalog.seed(&candidates).await.unwrap().created, 0);
    }

    #[tokio::test]
    async fn seed_ignores_unrelated_malformed_documents() {
        let (catalog, store) = catalog();
        store
            .insert_raw(bson::doc! { "_id": bson::oid::ObjectId::new(), "title": "Legacy", "brand": "Adidas" })
            .unwrap();

        let report = catalog.seed(&nike_catalog()).await.unwrap();
        assert_eq!(report.created, 3);
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn partial_seed_failure_keeps_earlier_inserts_and_retry_completes() {
        let store = Arc::new(FlakyStore {
            inner: InMemoryProductStore::new(),
            inserts_left: AtomicUsize::new(1),
        });
        let catalog = ProductCatalog::new(store.clone());

        let err = catalog.seed(&nike_catalog()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Store(StoreError::Driver { .. })));
        assert_eq!(store.inner.len(), 1);

        store.inserts_left.store(usize::MAX, Ordering::SeqCst);
        let retry = catalog.seed(&nike_catalog()).await.unwrap();
        assert_eq!(retry, SeedReport { created: 2, skipped: 1 });
        assert_eq!(store.inner.len(), 3);
    }

    #[tokio::test]
    async fn seed_rejects_invalid_candidates() {
        let (catalog, store) = catalog();
        let mut bad = nike_catalog().remove(0);
        bad.rating = Rating::new(7.0, 1);

        let err = catalog.seed(&[bad]).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn get_distinguishes_malformed_from_missing() {
        let (catalog, _store) = catalog();
        catalog.seed(&nike_catalog()).await.unwrap();

        let err = catalog.get("not-a-valid-id").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId(_)));

        let err = catalog.get(&ProductId::generate().to_string()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn get_returns_product_by_public_id() {
        let (catalog, _store) = catalog();
        catalog.seed(&nike_catalog()).await.unwrap();

        let listed = catalog.list(&ProductFilter::all()).await.unwrap();
        let pegasus = listed.iter().find(|p| p.title == "Nike Pegasus 40").unwrap();

        let fetched = catalog.get(&pegasus.id.to_string()).await.unwrap();
        assert_eq!(&fetched, pegasus);
    }

    #[tokio::test]
    async fn list_applies_brand_and_query() {
        let (catalog, _store) = catalog();
        catalog.seed(&nike_catalog()).await.unwrap();

        let nike = catalog
            .list(&ProductFilter::from_params(Some("Nike".to_string()), None))
            .await
            .unwrap();
        assert_eq!(nike.len(), 3);
        assert!(nike.iter().all(|p| p.brand == "Nike"));

        let pegasus = catalog
            .list(&ProductFilter::from_params(None, Some("Pegasus".to_string())))
            .await
            .unwrap();
        assert_eq!(pegasus.len(), 1);
        assert_eq!(pegasus[0].title, "Nike Pegasus 40");

        let none = catalog
            .list(&ProductFilter::from_params(Some("Adidas".to_string()), None))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
