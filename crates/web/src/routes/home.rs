//! Homepage route handler.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use tracing::instrument;

use crate::models::{Brand, Product};
use crate::state::AppState;

// =============================================================================
// Hero Configuration (Static content for the marketing carousel)
// =============================================================================

/// Position for hero slide CTA button.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonPosition {
    #[default]
    Center,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

/// A single slide in the hero carousel.
#[derive(Clone, Serialize)]
pub struct HeroSlide {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub image_path: String,
    pub image_alt: String,
    pub button_position: ButtonPosition,
}

/// Hero carousel configuration.
#[derive(Clone, Serialize)]
pub struct HeroConfig {
    pub slides: Vec<HeroSlide>,
    pub autoplay_ms: Option<u32>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            slides: vec![
                // Slide 1: current-gen GPU launch
                HeroSlide {
                    eyebrow: Some("Just landed".to_string()),
                    title: Some("Next-Gen Graphics, In Stock".to_string()),
                    subtitle: Some(
                        "The latest GPUs from every major board partner, ready to ship today."
                            .to_string(),
                    ),
                    button_text: Some("Shop Graphics Cards".to_string()),
                    button_url: Some("/products?category=gpu".to_string()),
                    image_path: "/static/images/hero/hero-gpu-launch.png".to_string(),
                    image_alt: "Latest generation graphics cards".to_string(),
                    button_position: ButtonPosition::Center,
                },
                // Slide 2: build-your-own campaign
                HeroSlide {
                    eyebrow: None,
                    title: Some("Built by You, Backed by Us".to_string()),
                    subtitle: Some(
                        "Every component checked for compatibility before it leaves the warehouse."
                            .to_string(),
                    ),
                    button_text: Some("Start Your Build".to_string()),
                    button_url: Some("/products".to_string()),
                    image_path: "/static/images/hero/hero-custom-build.png".to_string(),
                    image_alt: "Custom PC build on a workbench".to_string(),
                    button_position: ButtonPosition::BottomLeft,
                },
                // Slide 3: brand storefronts
                HeroSlide {
                    eyebrow: None,
                    title: None,
                    subtitle: None,
                    button_text: Some("Browse by Brand".to_string()),
                    button_url: Some("/brands".to_string()),
                    image_path: "/static/images/hero/hero-brand-wall.png".to_string(),
                    image_alt: "Wall of hardware brand logos".to_string(),
                    button_position: ButtonPosition::BottomCenter,
                },
            ],
            autoplay_ms: Some(5000),
        }
    }
}

// =============================================================================
// Product and Brand Views
// =============================================================================

/// Product display data for the homepage grid.
#[derive(Clone, Serialize)]
pub struct ProductView {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            slug: product.slug.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price.display(),
            compare_at_price: product
                .compare_at_price
                .filter(|original| original.amount > product.price.amount)
                .map(|original| original.display()),
            image_url: product.image_url.clone(),
            in_stock: product.in_stock(),
        }
    }
}

/// Brand display data for the homepage strip.
#[derive(Clone, Serialize)]
pub struct BrandView {
    pub slug: String,
    pub name: String,
    pub logo_url: Option<String>,
}

impl From<&Brand> for BrandView {
    fn from(brand: &Brand) -> Self {
        Self {
            slug: brand.slug.to_string(),
            name: brand.name.clone(),
            logo_url: brand.logo_url.clone(),
        }
    }
}

/// Homepage payload.
#[derive(Serialize)]
pub struct HomePayload {
    /// Hero carousel configuration.
    pub hero: HeroConfig,
    /// Featured products grid.
    pub featured_products: Vec<ProductView>,
    /// Featured brands strip.
    pub featured_brands: Vec<BrandView>,
}

/// Serve the homepage marketing sections.
///
/// Catalog failures degrade to empty sections so the homepage always
/// renders; the error is logged and the static hero still goes out.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let (featured_products, featured_brands) = state.catalog().home_sections().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch homepage sections: {e}");
            (Vec::new(), Vec::new())
        },
        |sections| {
            (
                sections.products.iter().map(ProductView::from).collect(),
                sections.brands.iter().map(BrandView::from).collect(),
            )
        },
    );

    Json(HomePayload {
        hero: HeroConfig::default(),
        featured_products,
        featured_brands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use volthaus_core::{BrandId, CurrencyCode, Price, ProductId, Slug};

    #[test]
    fn test_product_view_sale_price() {
        let product = Product {
            id: ProductId::new(1),
            slug: Slug::parse("rtx-5080-oc").expect("slug"),
            title: "RTX 5080 OC".to_string(),
            brand_id: BrandId::new(1),
            category: "gpu".to_string(),
            description: String::new(),
            price: Price::from_cents(99900, CurrencyCode::USD),
            compare_at_price: Some(Price::from_cents(109900, CurrencyCode::USD)),
            image_url: None,
            stock_quantity: 2,
            featured: true,
            created_at: DateTime::<Utc>::MIN_UTC,
            updated_at: DateTime::<Utc>::MIN_UTC,
        };

        let view = ProductView::from(&product);
        assert_eq!(view.price, "$999.00");
        assert_eq!(view.compare_at_price.as_deref(), Some("$1099.00"));
        assert!(view.in_stock);
    }

    #[test]
    fn test_default_hero_has_slides() {
        let hero = HeroConfig::default();
        assert!(!hero.slides.is_empty());
        assert_eq!(hero.autoplay_ms, Some(5000));
    }
}
