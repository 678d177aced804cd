use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;
use crate::services::HospitalListingService;

pub fn hospital_routes(service: Arc<HospitalListingService>) -> Router {
    Router::new()
        .route("/sessions/{session_id}/hospitals", get(handlers::get_hospitals))
        .route("/sessions/{session_id}/hospitals/load-more", post(handlers::load_more_hospitals))
        .route("/sessions/{session_id}/hospitals/modal", delete(handlers::close_hospital_doctors))
        .route("/sessions/{session_id}/hospitals/{hospital_id}/doctors", post(handlers::view_hospital_doctors))
        .with_state(service)
}
