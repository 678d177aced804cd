use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::events::PageEvent;
use crate::models::{AboutView, FooterView, HeroView, NavigationView, ServicesView, TestimonialsView};
use crate::services::{self, ContentService};

#[axum::debug_handler]
pub async fn get_navigation(
    State(service): State<Arc<ContentService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<NavigationView>, AppError> {
    Ok(Json(service.navigation(session_id).await?))
}

#[axum::debug_handler]
pub async fn toggle_menu(
    State(service): State<Arc<ContentService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<NavigationView>, AppError> {
    Ok(Json(service.toggle_menu(session_id).await?))
}

#[axum::debug_handler]
pub async fn follow_link(
    State(service): State<Arc<ContentService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<NavigationView>, AppError> {
    Ok(Json(service.follow_link(session_id).await?))
}

#[axum::debug_handler]
pub async fn get_hero(
    State(service): State<Arc<ContentService>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HeroView>, AppError> {
    Ok(Json(service.hero(session_id).await?))
}

#[axum::debug_handler]
pub async fn publish_event(
    State(service): State<Arc<ContentService>>,
    Path(session_id): Path<Uuid>,
    Json(event): Json<PageEvent>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let delivered = service.publish(session_id, event).await?;
    Ok((StatusCode::ACCEPTED, Json(json!({ "delivered": delivered }))))
}

pub async fn get_services() -> Json<ServicesView> {
    Json(services::services())
}

pub async fn get_testimonials() -> Json<TestimonialsView> {
    Json(services::testimonials())
}

pub async fn get_about() -> Json<AboutView> {
    Json(services::about())
}

pub async fn get_footer() -> Json<FooterView> {
    Json(services::footer())
}
