//! Contact message moderation route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use volthaus_core::{ContactMessageId, MessageStatus};

use crate::db::ContactMessageRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::ContactMessage;
use crate::state::AppState;

/// Query parameters for the moderation list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict to one moderation status.
    pub status: Option<MessageStatus>,
}

/// Moderation list payload.
#[derive(Serialize)]
pub struct MessageListPayload {
    pub messages: Vec<ContactMessage>,
}

/// Status update form.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: MessageStatus,
}

/// List contact messages for moderation.
///
/// GET /admin/messages
///
/// A repository failure degrades to an empty list so the moderation screen
/// still loads; the error is logged.
#[instrument(skip(state, _admin))]
pub async fn list(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Query(query): Query<ListQuery>,
) -> Json<MessageListPayload> {
    let messages = ContactMessageRepository::new(state.pool())
        .list(query.status)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to list contact messages: {e}");
            Vec::new()
        });

    Json(MessageListPayload { messages })
}

/// Update a message's moderation status.
///
/// POST /admin/messages/{id}/status
#[instrument(skip(state, _admin))]
pub async fn set_status(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
    Json(form): Json<StatusForm>,
) -> Result<Json<ContactMessage>> {
    let message = ContactMessageRepository::new(state.pool())
        .set_status(ContactMessageId::new(id), form.status)
        .await?;

    Ok(Json(message))
}

/// Delete a message.
///
/// POST /admin/messages/{id}/delete
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let deleted = ContactMessageRepository::new(state.pool())
        .delete(ContactMessageId::new(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!("message {id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}
