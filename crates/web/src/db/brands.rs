//! Brand repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use volthaus_core::{BrandId, Slug};

use super::RepositoryError;
use crate::models::Brand;

#[derive(sqlx::FromRow)]
struct BrandRow {
    id: i32,
    slug: String,
    name: String,
    description: Option<String>,
    logo_url: Option<String>,
    featured: bool,
    created_at: DateTime<Utc>,
}

impl BrandRow {
    fn into_model(self) -> Result<Brand, RepositoryError> {
        let slug = Slug::parse(&self.slug).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid brand slug in database: {e}"))
        })?;

        Ok(Brand {
            id: BrandId::new(self.id),
            slug,
            name: self.name,
            description: self.description,
            logo_url: self.logo_url,
            featured: self.featured,
            created_at: self.created_at,
        })
    }
}

const BRAND_COLUMNS: &str = "id, slug, name, description, logo_url, featured, created_at";

/// Repository for brand database operations.
pub struct BrandRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BrandRepository<'a> {
    /// Create a new brand repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all brands, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn list(&self) -> Result<Vec<Brand>, RepositoryError> {
        let sql = format!("SELECT {BRAND_COLUMNS} FROM brand ORDER BY name ASC");

        let rows: Vec<BrandRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        rows.into_iter().map(BrandRow::into_model).collect()
    }

    /// Get a brand by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored slug is invalid.
    pub async fn get_by_id(&self, id: BrandId) -> Result<Option<Brand>, RepositoryError> {
        let sql = format!("SELECT {BRAND_COLUMNS} FROM brand WHERE id = $1");

        let row: Option<BrandRow> = sqlx::query_as(&sql)
            .bind(id.as_i32())
            .fetch_optional(self.pool)
            .await?;

        row.map(BrandRow::into_model).transpose()
    }

    /// Get a brand by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored slug is invalid.
    pub async fn get_by_slug(&self, slug: &Slug) -> Result<Option<Brand>, RepositoryError> {
        let sql = format!("SELECT {BRAND_COLUMNS} FROM brand WHERE slug = $1");

        let row: Option<BrandRow> = sqlx::query_as(&sql)
            .bind(slug.as_str())
            .fetch_optional(self.pool)
            .await?;

        row.map(BrandRow::into_model).transpose()
    }

    /// List featured brands for homepage marketing sections.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn featured(&self, limit: i64) -> Result<Vec<Brand>, RepositoryError> {
        let sql =
            format!("SELECT {BRAND_COLUMNS} FROM brand WHERE featured ORDER BY name ASC LIMIT $1");

        let rows: Vec<BrandRow> = sqlx::query_as(&sql).bind(limit).fetch_all(self.pool).await?;

        rows.into_iter().map(BrandRow::into_model).collect()
    }

    /// Count all brands.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM brand")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
