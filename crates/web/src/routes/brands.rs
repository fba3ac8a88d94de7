//! Brand browsing route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use volthaus_core::Slug;

use crate::db::{BrandRepository, ProductRepository};
use crate::error::{AppError, Result};
use crate::models::{Brand, Product};
use crate::state::AppState;

/// Brand listing payload.
#[derive(Serialize)]
pub struct BrandListPayload {
    pub brands: Vec<Brand>,
}

/// Brand detail payload: the brand plus its catalog.
#[derive(Serialize)]
pub struct BrandDetailPayload {
    pub brand: Brand,
    pub products: Vec<Product>,
}

/// List all brands.
///
/// GET /brands
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<BrandListPayload>> {
    let brands = BrandRepository::new(state.pool()).list().await?;
    Ok(Json(BrandListPayload { brands }))
}

/// Show a brand and its products.
///
/// GET /brands/{slug}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BrandDetailPayload>> {
    let slug = Slug::parse(&slug).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let brand = BrandRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("brand '{slug}'")))?;

    let products = ProductRepository::new(state.pool())
        .list_for_brand(brand.id)
        .await?;

    Ok(Json(BrandDetailPayload { brand, products }))
}
