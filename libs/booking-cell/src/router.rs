use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers;
use crate::services::BookingService;

pub fn booking_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/sessions/{session_id}/booking", get(handlers::get_booking))
        .route("/sessions/{session_id}/booking/hospital", post(handlers::select_hospital))
        .route("/sessions/{session_id}/booking/doctor", post(handlers::select_doctor))
        .route("/sessions/{session_id}/booking/slot", post(handlers::select_slot))
        .route("/sessions/{session_id}/booking/details", patch(handlers::update_details))
        .route("/sessions/{session_id}/booking/submit", post(handlers::submit_booking))
        .route("/sessions/{session_id}/booking/book-another", post(handlers::book_another))
        .route("/sessions/{session_id}/booking/alert", delete(handlers::dismiss_alert))
        .with_state(service)
}
