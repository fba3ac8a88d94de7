//! Order models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use volthaus_core::{Email, OrderId, OrderItemId, OrderStatus, Price, ProductId};

/// Shipping destination captured at checkout time.
#[derive(Debug, Clone, Serialize)]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// A customer order.
///
/// `customer_ref` is the opaque value of the customer's auth cookie; this
/// server never interprets it beyond using it as the lookup key.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Database ID.
    pub id: OrderId,
    /// Public order number (e.g., "VH-10042").
    pub reference: String,
    /// Opaque customer reference from the external identity collaborator.
    pub customer_ref: String,
    /// Email the order confirmation went to.
    pub email: Email,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Order total.
    pub total: Price,
    /// Where the order ships.
    pub shipping: ShippingAddress,
    pub placed_at: DateTime<Utc>,
}

/// A line item on an order. Title and unit price are copied from the
/// product at purchase time so later catalog edits don't rewrite history.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    /// Database ID.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Product purchased.
    pub product_id: ProductId,
    /// Product title at purchase time.
    pub title: String,
    /// Units purchased.
    pub quantity: i32,
    /// Price per unit at purchase time.
    pub unit_price: Price,
}
