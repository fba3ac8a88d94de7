//! Domain models backed by the catalog database.

pub mod brand;
pub mod contact_message;
pub mod order;
pub mod product;

pub use brand::Brand;
pub use contact_message::{ContactMessage, NewContactMessage};
pub use order::{Order, OrderItem, ShippingAddress};
pub use product::Product;
