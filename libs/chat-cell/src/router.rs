use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::ChatService;

pub fn chat_routes(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/sessions/{session_id}/chat", get(handlers::get_chat))
        .route("/sessions/{session_id}/chat/open", post(handlers::open_chat))
        .route("/sessions/{session_id}/chat/close", post(handlers::close_chat))
        .route("/sessions/{session_id}/chat/messages", post(handlers::send_message))
        .with_state(service)
}
