//! Customer account route handlers.
//!
//! All handlers require the `customer_auth` cookie via [`RequireCustomer`];
//! the gatekeeper has already redirected anonymous requests, so the
//! extractor is the second line of the same presence-based check.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use volthaus_core::OrderId;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireCustomer;
use crate::models::{Order, OrderItem};
use crate::state::AppState;

/// Account overview payload.
#[derive(Serialize)]
pub struct AccountPayload {
    pub customer_ref: String,
    pub order_count: i64,
}

/// Order history payload.
#[derive(Serialize)]
pub struct OrderListPayload {
    pub orders: Vec<Order>,
}

/// Order detail payload with line items.
#[derive(Serialize)]
pub struct OrderDetailPayload {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Account overview.
///
/// GET /account
#[instrument(skip(state, customer))]
pub async fn index(
    State(state): State<AppState>,
    customer: RequireCustomer,
) -> Result<Json<AccountPayload>> {
    let order_count = OrderRepository::new(state.pool())
        .count_for_customer(&customer.0)
        .await?;

    Ok(Json(AccountPayload {
        customer_ref: customer.0,
        order_count,
    }))
}

/// Order history.
///
/// GET /account/orders
#[instrument(skip(state, customer))]
pub async fn orders(
    State(state): State<AppState>,
    customer: RequireCustomer,
) -> Result<Json<OrderListPayload>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_customer(&customer.0)
        .await?;

    Ok(Json(OrderListPayload { orders }))
}

/// Order detail.
///
/// GET /account/orders/{id}
#[instrument(skip(state, customer))]
pub async fn order_detail(
    State(state): State<AppState>,
    customer: RequireCustomer,
    Path(id): Path<i32>,
) -> Result<Json<OrderDetailPayload>> {
    let (order, items) = OrderRepository::new(state.pool())
        .get_for_customer(&customer.0, OrderId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(OrderDetailPayload { order, items }))
}
