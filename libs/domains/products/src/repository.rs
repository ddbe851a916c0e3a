use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products. The store owns
/// id assignment: inserts hand out fresh ids that are never reused within a
/// store instance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product with a freshly assigned id
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Delete a product by id; reports whether a record was removed
    async fn delete(&self, id: i64) -> ProductResult<bool>;

    /// List all products in stable (insertion id) order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;
}

#[derive(Debug)]
struct StoreInner {
    records: BTreeMap<i64, Product>,
    next_id: i64,
}

/// In-memory implementation of ProductRepository
///
/// One instance per process (or per test), injected into the service at
/// startup. `next_id` only ever increments, so deleted ids are never handed
/// out again.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                records: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.inner.write().await;

        let product = Product {
            id: store.next_id,
            name: input.name,
            price: input.price,
        };
        store.next_id += 1;
        store.records.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.inner.read().await;
        Ok(store.records.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut store = self.inner.write().await;

        if store.records.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.inner.read().await;
        Ok(store.records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create(name: &str, price: rust_decimal::Decimal) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_monotonic_positive_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.insert(create("Test Product", dec!(99.99))).await.unwrap();
        let second = repo
            .insert(create("Another Product", dec!(10.99)))
            .await
            .unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Test Product");
        assert_eq!(first.price, dec!(99.99));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_inserted_record() {
        let repo = InMemoryProductRepository::new();
        let product = repo.insert(create("Test Product", dec!(99.99))).await.unwrap();

        let found = repo.find_by_id(product.id).await.unwrap();
        assert_eq!(found, Some(product));

        let missing = repo.find_by_id(9999).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_in_effect() {
        let repo = InMemoryProductRepository::new();
        let product = repo.insert(create("Test Product", dec!(99.99))).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
        assert!(repo.find_by_id(product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let first = repo.insert(create("Test Product", dec!(99.99))).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo
            .insert(create("Another Product", dec!(10.99)))
            .await
            .unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_list_all_returns_every_record() {
        let repo = InMemoryProductRepository::new();
        repo.insert(create("Test Product", dec!(99.99))).await.unwrap();
        repo.insert(create("Another Product", dec!(10.99))).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
