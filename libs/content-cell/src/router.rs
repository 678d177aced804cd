use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::ContentService;

pub fn content_routes(service: Arc<ContentService>) -> Router {
    Router::new()
        .route("/sessions/{session_id}/navigation", get(handlers::get_navigation))
        .route("/sessions/{session_id}/navigation/menu", post(handlers::toggle_menu))
        .route("/sessions/{session_id}/navigation/follow", post(handlers::follow_link))
        .route("/sessions/{session_id}/hero", get(handlers::get_hero))
        .route("/sessions/{session_id}/events", post(handlers::publish_event))
        .route("/content/services", get(handlers::get_services))
        .route("/content/testimonials", get(handlers::get_testimonials))
        .route("/content/about", get(handlers::get_about))
        .route("/content/footer", get(handlers::get_footer))
        .with_state(service)
}
