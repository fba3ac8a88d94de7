//! Catalog seeding command.
//!
//! Inserts a small demo catalog (brands and products) for local development.
//! Idempotent: rows are keyed on slug and existing rows are left untouched.

use rust_decimal::Decimal;
use sqlx::PgPool;

use volthaus_web::db;

use super::database_url;

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

struct SeedBrand {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    featured: bool,
}

struct SeedProduct {
    slug: &'static str,
    title: &'static str,
    brand_slug: &'static str,
    category: &'static str,
    description: &'static str,
    price_cents: i64,
    compare_at_cents: Option<i64>,
    stock_quantity: i32,
    featured: bool,
}

const BRANDS: &[SeedBrand] = &[
    SeedBrand {
        slug: "novatek",
        name: "Novatek",
        description: "Graphics cards and AI accelerators.",
        featured: true,
    },
    SeedBrand {
        slug: "ferrum",
        name: "Ferrum Semiconductor",
        description: "Desktop and workstation processors.",
        featured: true,
    },
    SeedBrand {
        slug: "keystone-memory",
        name: "Keystone Memory",
        description: "DDR5 memory and NVMe storage.",
        featured: true,
    },
    SeedBrand {
        slug: "arcbox",
        name: "Arcbox",
        description: "Cases, cooling, and power supplies.",
        featured: false,
    },
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        slug: "novatek-gx-5080",
        title: "Novatek GX 5080 16GB",
        brand_slug: "novatek",
        category: "gpu",
        description: "Flagship graphics card with 16GB GDDR7.",
        price_cents: 109_900,
        compare_at_cents: None,
        stock_quantity: 12,
        featured: true,
    },
    SeedProduct {
        slug: "novatek-gx-5070",
        title: "Novatek GX 5070 12GB",
        brand_slug: "novatek",
        category: "gpu",
        description: "High-end 1440p gaming card with 12GB GDDR7.",
        price_cents: 64_900,
        compare_at_cents: Some(69_900),
        stock_quantity: 30,
        featured: true,
    },
    SeedProduct {
        slug: "ferrum-core-9-9900",
        title: "Ferrum Core 9 9900 (16-core)",
        brand_slug: "ferrum",
        category: "cpu",
        description: "16 cores, 32 threads, 5.6 GHz boost.",
        price_cents: 54_900,
        compare_at_cents: None,
        stock_quantity: 25,
        featured: true,
    },
    SeedProduct {
        slug: "ferrum-core-5-9500",
        title: "Ferrum Core 5 9500 (8-core)",
        brand_slug: "ferrum",
        category: "cpu",
        description: "8 cores, 16 threads, the mid-range sweet spot.",
        price_cents: 24_900,
        compare_at_cents: Some(27_900),
        stock_quantity: 60,
        featured: false,
    },
    SeedProduct {
        slug: "keystone-fury-ddr5-6400-32gb",
        title: "Keystone Fury DDR5-6400 32GB Kit",
        brand_slug: "keystone-memory",
        category: "memory",
        description: "2x16GB, CL32, optimized for current-gen platforms.",
        price_cents: 12_900,
        compare_at_cents: None,
        stock_quantity: 100,
        featured: true,
    },
    SeedProduct {
        slug: "keystone-nv3-2tb",
        title: "Keystone NV3 2TB NVMe SSD",
        brand_slug: "keystone-memory",
        category: "storage",
        description: "PCIe 5.0, 12,000 MB/s sequential reads.",
        price_cents: 18_900,
        compare_at_cents: Some(21_900),
        stock_quantity: 45,
        featured: true,
    },
    SeedProduct {
        slug: "arcbox-meridian-atx",
        title: "Arcbox Meridian ATX Case",
        brand_slug: "arcbox",
        category: "case",
        description: "Tempered glass mid-tower with four PWM fans.",
        price_cents: 10_900,
        compare_at_cents: None,
        stock_quantity: 18,
        featured: false,
    },
    SeedProduct {
        slug: "arcbox-volt-850w",
        title: "Arcbox Volt 850W 80+ Gold PSU",
        brand_slug: "arcbox",
        category: "psu",
        description: "Fully modular, ATX 3.1, ten-year warranty.",
        price_cents: 13_900,
        compare_at_cents: None,
        stock_quantity: 40,
        featured: false,
    },
];

/// Seed the catalog.
///
/// # Errors
///
/// Returns an error if the database URL is missing or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url =
        database_url().ok_or(SeedError::MissingEnvVar("VOLTHAUS_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    seed_brands(&pool).await?;
    seed_products(&pool).await?;

    tracing::info!("Seed complete!");
    Ok(())
}

async fn seed_brands(pool: &PgPool) -> Result<(), SeedError> {
    for brand in BRANDS {
        let result = sqlx::query(
            "INSERT INTO brand (slug, name, description, featured)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(brand.slug)
        .bind(brand.name)
        .bind(brand.description)
        .bind(brand.featured)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(slug = brand.slug, "Seeded brand");
        }
    }
    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<(), SeedError> {
    for product in PRODUCTS {
        let result = sqlx::query(
            "INSERT INTO product
                 (slug, title, brand_id, category, description, price,
                  compare_at_price, stock_quantity, featured)
             SELECT $1, $2, b.id, $3, $4, $5, $6, $7, $8
             FROM brand b
             WHERE b.slug = $9
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(product.slug)
        .bind(product.title)
        .bind(product.category)
        .bind(product.description)
        .bind(Decimal::new(product.price_cents, 2))
        .bind(product.compare_at_cents.map(|cents| Decimal::new(cents, 2)))
        .bind(product.stock_quantity)
        .bind(product.featured)
        .bind(product.brand_slug)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(slug = product.slug, "Seeded product");
        }
    }
    Ok(())
}
