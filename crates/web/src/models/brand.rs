//! Brand model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use volthaus_core::{BrandId, Slug};

/// A hardware manufacturer carried by the store.
#[derive(Debug, Clone, Serialize)]
pub struct Brand {
    /// Database ID.
    pub id: BrandId,
    /// Stable public handle used in storefront URLs.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Short blurb for brand pages.
    pub description: Option<String>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Shown in homepage marketing sections.
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}
