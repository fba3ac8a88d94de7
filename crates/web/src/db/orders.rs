//! Order repository for database operations.
//!
//! Orders are read-only from the web server's point of view: checkout and
//! fulfillment write them through other channels. The account area only ever
//! sees orders belonging to the presented customer reference.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use volthaus_core::{CurrencyCode, Email, OrderId, OrderItemId, OrderStatus, Price, ProductId};

use super::RepositoryError;
use crate::models::{Order, OrderItem, ShippingAddress};

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    reference: String,
    customer_ref: String,
    email: String,
    status: OrderStatus,
    total: Decimal,
    ship_name: String,
    ship_line1: String,
    ship_line2: Option<String>,
    ship_city: String,
    ship_postal_code: String,
    ship_country: String,
    placed_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_model(self) -> Result<Order, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Order {
            id: OrderId::new(self.id),
            reference: self.reference,
            customer_ref: self.customer_ref,
            email,
            status: self.status,
            total: Price::new(self.total, CurrencyCode::USD),
            shipping: ShippingAddress {
                name: self.ship_name,
                line1: self.ship_line1,
                line2: self.ship_line2,
                city: self.ship_city,
                postal_code: self.ship_postal_code,
                country: self.ship_country,
            },
            placed_at: self.placed_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: i32,
    order_id: i32,
    product_id: i32,
    title: String,
    quantity: i32,
    unit_price: Decimal,
}

impl OrderItemRow {
    fn into_model(self) -> OrderItem {
        OrderItem {
            id: OrderItemId::new(self.id),
            order_id: OrderId::new(self.order_id),
            product_id: ProductId::new(self.product_id),
            title: self.title,
            quantity: self.quantity,
            unit_price: Price::new(self.unit_price, CurrencyCode::USD),
        }
    }
}

const ORDER_COLUMNS: &str = "id, reference, customer_ref, email, status, total, ship_name, \
     ship_line1, ship_line2, ship_city, ship_postal_code, ship_country, placed_at";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a customer's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is invalid.
    pub async fn list_for_customer(
        &self,
        customer_ref: &str,
    ) -> Result<Vec<Order>, RepositoryError> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS}
             FROM orders
             WHERE customer_ref = $1
             ORDER BY placed_at DESC, id DESC"
        );

        let rows: Vec<OrderRow> = sqlx::query_as(&sql)
            .bind(customer_ref)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(OrderRow::into_model).collect()
    }

    /// Count a customer's orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_for_customer(&self, customer_ref: &str) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE customer_ref = $1")
            .bind(customer_ref)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Get one of a customer's orders with its line items.
    ///
    /// The customer reference is part of the lookup so one customer can
    /// never read another's order by guessing IDs.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get_for_customer(
        &self,
        customer_ref: &str,
        id: OrderId,
    ) -> Result<Option<(Order, Vec<OrderItem>)>, RepositoryError> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS}
             FROM orders
             WHERE id = $1 AND customer_ref = $2"
        );

        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(id.as_i32())
            .bind(customer_ref)
            .fetch_optional(self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let order = row.into_model()?;

        let items: Vec<OrderItemRow> = sqlx::query_as(
            "SELECT id, order_id, product_id, title, quantity, unit_price
             FROM order_item
             WHERE order_id = $1
             ORDER BY id ASC",
        )
        .bind(id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(Some((
            order,
            items.into_iter().map(OrderItemRow::into_model).collect(),
        )))
    }
}
