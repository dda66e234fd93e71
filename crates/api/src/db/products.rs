//! Product repository for database operations.
//!
//! Products are addressed by the `product_id` business key. The `seller_id`
//! column references a profile's business key but carries no foreign-key
//! constraint: listings whose seller has been deleted stay resolvable and
//! the consumer is expected to degrade gracefully.

use sqlx::PgPool;
use sqlx::types::Json;

use tradewithus_core::{Price, Product, ProductDetails, ProductId, ProfileId, ShippingDetails};

use super::{RepositoryError, conflict_on_unique};

/// Select list shared by every query that reads a full product row.
const PRODUCT_COLUMNS: &str =
    "product_id, product_name, images, seller_id, price, details, shipping";

/// Database row shape for a product.
#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: ProductId,
    product_name: String,
    images: Json<Vec<String>>,
    seller_id: ProfileId,
    price: Json<Price>,
    details: Json<ProductDetails>,
    shipping: Json<ShippingDetails>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            images: row.images.0,
            seller_id: row.seller_id,
            price: row.price.0,
            details: row.details.0,
            shipping: row.shipping.0,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a product by its business key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, product_id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(product_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Get all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get all products listed by one seller.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_seller(
        &self,
        seller_id: &ProfileId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE seller_id = $1 ORDER BY id"
        ))
        .bind(seller_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the business key already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (product_id, product_name, images, seller_id, price, \
                 details, shipping) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.product_id)
        .bind(&product.product_name)
        .bind(Json(&product.images))
        .bind(&product.seller_id)
        .bind(Json(&product.price))
        .bind(Json(&product.details))
        .bind(Json(&product.shipping))
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "productId already exists"))?;

        Ok(row.into())
    }

    /// Replace an existing product wholesale.
    ///
    /// Every column except the immutable business key is overwritten with the
    /// supplied document. Returns `None` when no product exists for the key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        product_id: &ProductId,
        product: &Product,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET product_name = $2, images = $3, seller_id = $4, \
                 price = $5, details = $6, shipping = $7, updated_at = now() \
             WHERE product_id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(product_id)
        .bind(&product.product_name)
        .bind(Json(&product.images))
        .bind(&product.seller_id)
        .bind(Json(&product.price))
        .bind(Json(&product.details))
        .bind(Json(&product.shipping))
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Delete a product by its business key.
    ///
    /// # Returns
    ///
    /// Returns `true` if a product was deleted, `false` if none existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, product_id: &ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether any products exist in the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self) -> Result<bool, RepositoryError> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products)")
            .fetch_one(self.pool)
            .await?;

        Ok(row.0)
    }
}
