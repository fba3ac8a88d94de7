//! Integration tests for storefront browsing.
//!
//! These tests require a running server with a migrated, seeded database
//! (cargo run -p volthaus-cli -- seed).
//!
//! Run with: cargo test -p volthaus-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use volthaus_integration_tests::{base_url, raw_client};

#[tokio::test]
#[ignore = "Requires running server with seeded catalog"]
async fn test_homepage_sections() {
    let home: Value = raw_client()
        .get(format!("{}/", base_url()))
        .send()
        .await
        .expect("Failed to fetch homepage")
        .json()
        .await
        .expect("Failed to parse homepage");

    assert!(home["hero"]["slides"].as_array().is_some_and(|s| !s.is_empty()));
    assert!(home["featured_products"].is_array());
    assert!(home["featured_brands"].is_array());
}

#[tokio::test]
#[ignore = "Requires running server with seeded catalog"]
async fn test_product_listing_and_filters() {
    let client = raw_client();

    let all: Value = client
        .get(format!("{}/products", base_url()))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to parse listing");
    let total = all["total"].as_i64().expect("total");
    assert!(total > 0);

    let gpus: Value = client
        .get(format!("{}/products?category=gpu", base_url()))
        .send()
        .await
        .expect("Failed to list GPUs")
        .json()
        .await
        .expect("Failed to parse listing");
    assert!(gpus["total"].as_i64().expect("total") <= total);
}

#[tokio::test]
#[ignore = "Requires running server with seeded catalog"]
async fn test_product_detail_and_unknown_slug() {
    let client = raw_client();

    let detail: Value = client
        .get(format!("{}/products/novatek-gx-5080", base_url()))
        .send()
        .await
        .expect("Failed to fetch product")
        .json()
        .await
        .expect("Failed to parse product");
    assert_eq!(detail["product"]["slug"], "novatek-gx-5080");
    assert_eq!(detail["brand"]["slug"], "novatek");

    let resp = client
        .get(format!("{}/products/does-not-exist", base_url()))
        .send()
        .await
        .expect("Failed to fetch product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server with seeded catalog"]
async fn test_brand_detail_lists_products() {
    let detail: Value = raw_client()
        .get(format!("{}/brands/ferrum", base_url()))
        .send()
        .await
        .expect("Failed to fetch brand")
        .json()
        .await
        .expect("Failed to parse brand");

    assert_eq!(detail["brand"]["name"], "Ferrum Semiconductor");
    assert!(detail["products"].as_array().is_some_and(|p| !p.is_empty()));
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_contact_form_validation() {
    let client = raw_client();

    let resp = client
        .post(format!("{}/contact", base_url()))
        .json(&json!({
            "name": "",
            "email": "buyer@example.com",
            "message": "hello",
        }))
        .send()
        .await
        .expect("Failed to post contact form");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .post(format!("{}/contact", base_url()))
        .json(&json!({
            "name": "Buyer",
            "email": "not-an-email",
            "message": "hello",
        }))
        .send()
        .await
        .expect("Failed to post contact form");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
