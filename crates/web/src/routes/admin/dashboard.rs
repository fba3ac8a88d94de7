//! Admin dashboard route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::{BrandRepository, ContactMessageRepository, ProductFilter, ProductRepository};
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Dashboard counts payload.
#[derive(Serialize)]
pub struct DashboardPayload {
    pub new_messages: i64,
    pub products: i64,
    pub brands: i64,
}

/// Dashboard overview.
///
/// GET /admin
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<DashboardPayload>> {
    let pool = state.pool();

    let new_messages = ContactMessageRepository::new(pool).count_new().await?;
    let products = ProductRepository::new(pool)
        .count(&ProductFilter::default())
        .await?;
    let brands = BrandRepository::new(pool).count().await?;

    Ok(Json(DashboardPayload {
        new_messages,
        products,
        brands,
    }))
}
