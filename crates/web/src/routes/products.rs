//! Product browsing route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use volthaus_core::Slug;

use crate::db::products::PRODUCTS_PER_PAGE;
use crate::db::{BrandRepository, ProductFilter, ProductRepository};
use crate::error::{AppError, Result};
use crate::models::{Brand, Product};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Brand slug filter.
    pub brand: Option<String>,
    /// Category handle filter.
    pub category: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
}

/// Product listing payload.
#[derive(Serialize)]
pub struct ProductListPayload {
    pub products: Vec<Product>,
    pub page: u32,
    pub per_page: i64,
    pub total: i64,
}

/// Product detail payload.
#[derive(Serialize)]
pub struct ProductDetailPayload {
    pub product: Product,
    pub brand: Option<Brand>,
}

/// List products with optional brand/category filters.
///
/// GET /products
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductListPayload>> {
    let page = query.page.unwrap_or(1).max(1);
    let filter = ProductFilter {
        brand_slug: query.brand,
        category: query.category,
        page,
    };

    let repo = ProductRepository::new(state.pool());
    let products = repo.list(&filter).await?;
    let total = repo.count(&filter).await?;

    Ok(Json(ProductListPayload {
        products,
        page,
        per_page: PRODUCTS_PER_PAGE,
        total,
    }))
}

/// Show a single product.
///
/// GET /products/{slug}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetailPayload>> {
    let slug = Slug::parse(&slug).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let product = ProductRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product '{slug}'")))?;

    // A missing brand row just omits the section rather than failing the page.
    let brand = BrandRepository::new(state.pool())
        .get_by_id(product.brand_id)
        .await?;

    Ok(Json(ProductDetailPayload { product, brand }))
}
