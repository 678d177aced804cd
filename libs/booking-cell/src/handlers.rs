use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{BookingView, DetailsUpdate, SelectionRequest};
use crate::services::BookingService;

#[axum::debug_handler]
pub async fn get_booking(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.view(session_id).await?))
}

#[axum::debug_handler]
pub async fn select_hospital(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.select_hospital(session_id, &request.value).await?))
}

#[axum::debug_handler]
pub async fn select_doctor(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.select_doctor(session_id, &request.value).await?))
}

#[axum::debug_handler]
pub async fn select_slot(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.select_slot(session_id, &request.value).await?))
}

#[axum::debug_handler]
pub async fn update_details(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
    Json(update): Json<DetailsUpdate>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.update_details(session_id, update).await?))
}

#[axum::debug_handler]
pub async fn submit_booking(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.submit(session_id).await?))
}

#[axum::debug_handler]
pub async fn book_another(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.dismiss_confirmation(session_id).await?))
}

#[axum::debug_handler]
pub async fn dismiss_alert(
    State(service): State<Arc<BookingService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    Ok(Json(service.dismiss_alert(session_id).await?))
}
