//! Catalog service with short-lived caching for homepage sections.
//!
//! The homepage is the hottest path in the store and its featured sections
//! change rarely, so they are cached in-memory with a short TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use crate::db::{BrandRepository, ProductRepository, RepositoryError};
use crate::models::{Brand, Product};

/// Cache TTL for homepage sections.
const HOME_SECTIONS_TTL: Duration = Duration::from_secs(30);

/// Number of featured products on the homepage.
const FEATURED_PRODUCTS: i64 = 8;

/// Number of featured brands on the homepage.
const FEATURED_BRANDS: i64 = 6;

const HOME_KEY: &str = "home";

/// Featured catalog rows for the homepage.
#[derive(Debug, Clone)]
pub struct CatalogSections {
    pub products: Vec<Product>,
    pub brands: Vec<Brand>,
}

/// Catalog reads with caching.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    pool: PgPool,
    home_cache: Cache<&'static str, CatalogSections>,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let home_cache = Cache::builder()
            .max_capacity(4)
            .time_to_live(HOME_SECTIONS_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogInner { pool, home_cache }),
        }
    }

    /// Featured products and brands for the homepage, cached for a short
    /// interval.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the underlying queries fail on a cache
    /// miss.
    pub async fn home_sections(&self) -> Result<CatalogSections, RepositoryError> {
        if let Some(sections) = self.inner.home_cache.get(HOME_KEY).await {
            return Ok(sections);
        }

        let products = ProductRepository::new(&self.inner.pool)
            .featured(FEATURED_PRODUCTS)
            .await?;
        let brands = BrandRepository::new(&self.inner.pool)
            .featured(FEATURED_BRANDS)
            .await?;

        let sections = CatalogSections { products, brands };
        self.inner
            .home_cache
            .insert(HOME_KEY, sections.clone())
            .await;

        Ok(sections)
    }
}
