use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::DoctorDirectoryService;

pub fn doctor_routes(service: Arc<DoctorDirectoryService>) -> Router {
    Router::new()
        .route("/sessions/{session_id}/doctors", get(handlers::get_doctors))
        .route("/sessions/{session_id}/doctors/filter", post(handlers::filter_doctors))
        .route("/sessions/{session_id}/doctors/load-more", post(handlers::load_more_doctors))
        .with_state(service)
}
