//! Product service.
//!
//! Thin orchestration over the product repository; every operation performs
//! exactly one data-access call. Seller references are passed through
//! unchecked (orphaned listings are a documented, tolerated state).

use sqlx::PgPool;

use tradewithus_core::{Product, ProductId, ProfileId};

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;

/// Service for product operations.
pub struct ProductService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> ProductService<'a> {
    /// Create a new product service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// Get a product by its business key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn get(&self, product_id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        self.products.get(product_id).await
    }

    /// Get all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.get_all().await
    }

    /// Get all products listed by one seller.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn get_by_seller(
        &self,
        seller_id: &ProfileId,
    ) -> Result<Vec<Product>, RepositoryError> {
        self.products.get_by_seller(seller_id).await
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate business key.
    pub async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        self.products.create(product).await
    }

    /// Replace an existing product wholesale; `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn update(
        &self,
        product_id: &ProductId,
        product: &Product,
    ) -> Result<Option<Product>, RepositoryError> {
        self.products.update(product_id, product).await
    }

    /// Delete a product; `true` iff a document was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn delete(&self, product_id: &ProductId) -> Result<bool, RepositoryError> {
        self.products.delete(product_id).await
    }

    /// Check whether any products exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store operation fails.
    pub async fn exists(&self) -> Result<bool, RepositoryError> {
        self.products.exists().await
    }
}
