//! Contact message repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use volthaus_core::{ContactMessageId, Email, MessageStatus};

use super::RepositoryError;
use crate::models::{ContactMessage, NewContactMessage};

#[derive(sqlx::FromRow)]
struct ContactMessageRow {
    id: i32,
    name: String,
    email: String,
    subject: Option<String>,
    body: String,
    status: MessageStatus,
    created_at: DateTime<Utc>,
}

impl ContactMessageRow {
    fn into_model(self) -> Result<ContactMessage, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(ContactMessage {
            id: ContactMessageId::new(self.id),
            name: self.name,
            email,
            subject: self.subject,
            body: self.body,
            status: self.status,
            created_at: self.created_at,
        })
    }
}

const MESSAGE_COLUMNS: &str = "id, name, email, subject, body, status, created_at";

/// Repository for contact message database operations.
pub struct ContactMessageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactMessageRepository<'a> {
    /// Create a new contact message repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a new message from the storefront contact form.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::DataCorruption` if the returned row is invalid.
    pub async fn create(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, RepositoryError> {
        let sql = format!(
            "INSERT INTO contact_message (name, email, subject, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {MESSAGE_COLUMNS}"
        );

        let row: ContactMessageRow = sqlx::query_as(&sql)
            .bind(&message.name)
            .bind(message.email.as_str())
            .bind(message.subject.as_deref())
            .bind(&message.body)
            .fetch_one(self.pool)
            .await?;

        row.into_model()
    }

    /// List messages for moderation, newest first, optionally filtered by
    /// status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is invalid.
    pub async fn list(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, RepositoryError> {
        let sql = format!(
            "SELECT {MESSAGE_COLUMNS}
             FROM contact_message
             WHERE ($1::message_status IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );

        let rows: Vec<ContactMessageRow> = sqlx::query_as(&sql)
            .bind(status)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(ContactMessageRow::into_model).collect()
    }

    /// Update a message's moderation status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the message doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(
        &self,
        id: ContactMessageId,
        status: MessageStatus,
    ) -> Result<ContactMessage, RepositoryError> {
        let sql = format!(
            "UPDATE contact_message
             SET status = $1
             WHERE id = $2
             RETURNING {MESSAGE_COLUMNS}"
        );

        let row: Option<ContactMessageRow> = sqlx::query_as(&sql)
            .bind(status)
            .bind(id.as_i32())
            .fetch_optional(self.pool)
            .await?;

        row.ok_or(RepositoryError::NotFound)?.into_model()
    }

    /// Delete a message.
    ///
    /// # Returns
    ///
    /// Returns `true` if the message was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ContactMessageId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM contact_message WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count messages awaiting moderation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_new(&self) -> Result<i64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contact_message WHERE status = 'new'")
                .fetch_one(self.pool)
                .await?;
        Ok(count)
    }
}
