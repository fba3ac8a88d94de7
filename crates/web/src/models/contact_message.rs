//! Contact message model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use volthaus_core::{ContactMessageId, Email, MessageStatus};

/// A message submitted through the storefront contact form, moderated in
/// the admin back office.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    /// Database ID.
    pub id: ContactMessageId,
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: Email,
    /// Optional subject line.
    pub subject: Option<String>,
    /// Message body.
    pub body: String,
    /// Moderation status.
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated contact message ready for insertion.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: Option<String>,
    pub body: String,
}
