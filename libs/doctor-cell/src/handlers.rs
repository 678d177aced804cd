use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{DoctorsView, SpecialtyFilterRequest};
use crate::services::DoctorDirectoryService;

#[axum::debug_handler]
pub async fn get_doctors(
    State(service): State<Arc<DoctorDirectoryService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DoctorsView>, AppError> {
    Ok(Json(service.view(session_id).await?))
}

#[axum::debug_handler]
pub async fn filter_doctors(
    State(service): State<Arc<DoctorDirectoryService>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SpecialtyFilterRequest>,
) -> Result<Json<DoctorsView>, AppError> {
    Ok(Json(service.filter(session_id, request.specialty.as_deref()).await?))
}

#[axum::debug_handler]
pub async fn load_more_doctors(
    State(service): State<Arc<DoctorDirectoryService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DoctorsView>, AppError> {
    Ok(Json(service.load_more(session_id).await?))
}
