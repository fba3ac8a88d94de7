//! Product repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use volthaus_core::{BrandId, CurrencyCode, Price, ProductId, Slug};

use super::RepositoryError;
use crate::models::Product;

/// Page size for product listings.
pub const PRODUCTS_PER_PAGE: i64 = 24;

/// Listing filters for the storefront product index.
#[derive(Debug, Default, Clone)]
pub struct ProductFilter {
    /// Restrict to a brand by its slug.
    pub brand_slug: Option<String>,
    /// Restrict to a category handle.
    pub category: Option<String>,
    /// 1-based page number.
    pub page: u32,
}

impl ProductFilter {
    fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * PRODUCTS_PER_PAGE
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    slug: String,
    title: String,
    brand_id: i32,
    category: String,
    description: String,
    price: Decimal,
    compare_at_price: Option<Decimal>,
    image_url: Option<String>,
    stock_quantity: i32,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_model(self) -> Result<Product, RepositoryError> {
        let slug = Slug::parse(&self.slug).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid product slug in database: {e}"))
        })?;

        Ok(Product {
            id: ProductId::new(self.id),
            slug,
            title: self.title,
            brand_id: BrandId::new(self.brand_id),
            category: self.category,
            description: self.description,
            price: Price::new(self.price, CurrencyCode::USD),
            compare_at_price: self
                .compare_at_price
                .map(|amount| Price::new(amount, CurrencyCode::USD)),
            image_url: self.image_url,
            stock_quantity: self.stock_quantity,
            featured: self.featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const PRODUCT_COLUMNS: &str = "p.id, p.slug, p.title, p.brand_id, p.category, p.description, \
     p.price, p.compare_at_price, p.image_url, p.stock_quantity, p.featured, \
     p.created_at, p.updated_at";

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

    /// List products for the storefront index, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM product p
             JOIN brand b ON b.id = p.brand_id
             WHERE ($1::text IS NULL OR b.slug = $1)
               AND ($2::text IS NULL OR p.category = $2)
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $3 OFFSET $4"
        );

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(filter.brand_slug.as_deref())
            .bind(filter.category.as_deref())
            .bind(PRODUCTS_PER_PAGE)
            .bind(filter.offset())
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(ProductRow::into_model).collect()
    }

    /// Count products matching a filter (for pagination).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self, filter: &ProductFilter) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*)
             FROM product p
             JOIN brand b ON b.id = p.brand_id
             WHERE ($1::text IS NULL OR b.slug = $1)
               AND ($2::text IS NULL OR p.category = $2)",
        )
        .bind(filter.brand_slug.as_deref())
        .bind(filter.category.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Get a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored slug is invalid.
    pub async fn get_by_slug(&self, slug: &Slug) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM product p WHERE p.slug = $1");

        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(slug.as_str())
            .fetch_optional(self.pool)
            .await?;

        row.map(ProductRow::into_model).transpose()
    }

    /// List products belonging to a brand, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn list_for_brand(&self, brand_id: BrandId) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM product p
             WHERE p.brand_id = $1
             ORDER BY p.created_at DESC, p.id DESC"
        );

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(brand_id.as_i32())
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(ProductRow::into_model).collect()
    }

    /// List featured products for homepage marketing sections.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn featured(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS}
             FROM product p
             WHERE p.featured
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $1"
        );

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(ProductRow::into_model).collect()
    }
}
