use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{ChatView, SendMessageRequest};
use crate::services::ChatService;

#[axum::debug_handler]
pub async fn get_chat(
    State(service): State<Arc<ChatService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatView>, AppError> {
    Ok(Json(service.view(session_id).await?))
}

#[axum::debug_handler]
pub async fn open_chat(
    State(service): State<Arc<ChatService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatView>, AppError> {
    Ok(Json(service.set_open(session_id, true).await?))
}

#[axum::debug_handler]
pub async fn close_chat(
    State(service): State<Arc<ChatService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatView>, AppError> {
    Ok(Json(service.set_open(session_id, false).await?))
}

#[axum::debug_handler]
pub async fn send_message(
    State(service): State<Arc<ChatService>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<ChatView>, AppError> {
    Ok(Json(service.send(session_id, &request.message).await?))
}
