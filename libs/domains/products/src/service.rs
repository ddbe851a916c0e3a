//! Product Service - use-case orchestration layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, ProductView, ProductsQuery};
use crate::repository::ProductRepository;
use crate::sort;

/// Product service implementing the create/get/list/delete use-cases
///
/// A thin orchestration over the repository and sort policy, translating
/// absent records and unrecognized sort keys into typed failures.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    ///
    /// No validation of name or price is performed: any JSON-valid input is
    /// accepted, per the documented contract.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<ProductView> {
        let product = self.repository.insert(input).await?;
        Ok(product.into())
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<ProductView> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductView::from)
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products ordered by the requested sort key
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductsQuery) -> ProductResult<Vec<ProductView>> {
        let products = self.repository.list_all().await?;
        let ordered = sort::order_by(products, &query.sort_by, query.sort_descending)?;
        Ok(ordered.into_iter().map(ProductView::from).collect())
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
