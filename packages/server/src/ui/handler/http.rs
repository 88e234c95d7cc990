//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    domain::UserId,
    infrastructure::dto::http::{StoredMessageDto, UserDto},
    ui::state::AppState,
};

const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get the full user roster
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserDto>>, StatusCode> {
    let users = state.directory.list_users().await.map_err(|e| {
        tracing::error!("Failed to list users: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Query parameters for message history
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<usize>,
    pub viewer_id: Option<i64>,
}

/// Get recent message history, oldest first
///
/// Without `viewer_id` only public messages are returned; with it,
/// private messages the viewer sent or received are included too.
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<StoredMessageDto>>, StatusCode> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let viewer = query.viewer_id.map(UserId::new);

    let messages = state.store.get_messages(limit, viewer).await.map_err(|e| {
        tracing::error!("Failed to load message history: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(
        messages.into_iter().map(StoredMessageDto::from).collect(),
    ))
}
