//! Business services for the Volthaus server.

pub mod auth;
pub mod catalog;

pub use auth::AuthService;
pub use catalog::{CatalogService, CatalogSections};
