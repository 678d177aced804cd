use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use booking_cell::router::booking_routes;
use chat_cell::router::chat_routes;
use content_cell::router::content_routes;
use doctor_cell::router::doctor_routes;
use hospital_cell::router::hospital_routes;

use crate::handlers;
use crate::shell::Shell;

pub fn create_router(shell: Arc<Shell>) -> Router {
    Router::new()
        .route("/", get(|| async { "MedConnect is running!" }))
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{session_id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .with_state(shell.clone())
        .merge(content_routes(shell.content()))
        .merge(hospital_routes(shell.hospitals()))
        .merge(doctor_routes(shell.doctors()))
        .merge(booking_routes(shell.booking()))
        .merge(chat_routes(shell.chat()))
        .layer(middleware::from_fn_with_state(shell, handlers::track_activity))
}
