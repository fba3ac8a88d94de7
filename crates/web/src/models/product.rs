//! Product model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use volthaus_core::{BrandId, Price, ProductId, Slug};

/// A catalog product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Database ID.
    pub id: ProductId,
    /// Stable public handle used in storefront URLs.
    pub slug: Slug,
    /// Display title.
    pub title: String,
    /// Owning brand.
    pub brand_id: BrandId,
    /// Category handle (e.g., "cpu", "gpu", "memory").
    pub category: String,
    /// Long-form description.
    pub description: String,
    /// Current selling price.
    pub price: Price,
    /// Original price when the product is on sale.
    pub compare_at_price: Option<Price>,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Units in stock.
    pub stock_quantity: i32,
    /// Shown in homepage marketing sections.
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product can currently be purchased.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Whether the product is discounted.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.compare_at_price
            .is_some_and(|original| original.amount > self.price.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volthaus_core::CurrencyCode;

    fn product(price_cents: i64, compare_cents: Option<i64>, stock: i32) -> Product {
        Product {
            id: ProductId::new(1),
            slug: Slug::parse("ryzen-9-7950x").expect("slug"),
            title: "Ryzen 9 7950X".to_string(),
            brand_id: BrandId::new(1),
            category: "cpu".to_string(),
            description: String::new(),
            price: Price::from_cents(price_cents, CurrencyCode::USD),
            compare_at_price: compare_cents.map(|c| Price::from_cents(c, CurrencyCode::USD)),
            image_url: None,
            stock_quantity: stock,
            featured: false,
            created_at: DateTime::<Utc>::MIN_UTC,
            updated_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn test_in_stock() {
        assert!(product(59900, None, 3).in_stock());
        assert!(!product(59900, None, 0).in_stock());
    }

    #[test]
    fn test_on_sale_requires_higher_compare_price() {
        assert!(product(54900, Some(59900), 1).on_sale());
        assert!(!product(59900, Some(59900), 1).on_sale());
        assert!(!product(59900, None, 1).on_sale());
    }
}
