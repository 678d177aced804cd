use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::HospitalsView;
use crate::services::HospitalListingService;

#[axum::debug_handler]
pub async fn get_hospitals(
    State(service): State<Arc<HospitalListingService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HospitalsView>, AppError> {
    Ok(Json(service.view(session_id).await?))
}

#[axum::debug_handler]
pub async fn load_more_hospitals(
    State(service): State<Arc<HospitalListingService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HospitalsView>, AppError> {
    Ok(Json(service.load_more(session_id).await?))
}

#[axum::debug_handler]
pub async fn view_hospital_doctors(
    State(service): State<Arc<HospitalListingService>>,
    Path((session_id, hospital_id)): Path<(Uuid, String)>,
) -> Result<Json<HospitalsView>, AppError> {
    Ok(Json(service.open_roster(session_id, &hospital_id).await?))
}

#[axum::debug_handler]
pub async fn close_hospital_doctors(
    State(service): State<Arc<HospitalListingService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HospitalsView>, AppError> {
    Ok(Json(service.close_roster(session_id).await?))
}
