use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared_models::error::AppError;

use crate::shell::{PageView, Shell};

#[derive(Debug, Default, Deserialize)]
pub struct MountQuery {
    /// Location hash the page was opened at, e.g. `#doctors`.
    #[serde(default)]
    pub hash: String,
}

#[axum::debug_handler]
pub async fn create_session(
    State(shell): State<Arc<Shell>>,
    Query(query): Query<MountQuery>,
) -> (StatusCode, Json<PageView>) {
    (StatusCode::CREATED, Json(shell.mount(&query.hash).await))
}

#[axum::debug_handler]
pub async fn get_session(
    State(shell): State<Arc<Shell>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PageView>, AppError> {
    Ok(Json(shell.page(session_id).await?))
}

#[axum::debug_handler]
pub async fn delete_session(
    State(shell): State<Arc<Shell>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    shell.unmount(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Refreshes the idle clock of the page a `/sessions/{id}/...` request targets.
pub async fn track_activity(
    State(shell): State<Arc<Shell>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(session_id) = session_in_path(request.uri().path()) {
        shell.touch(session_id).await;
    }
    next.run(request).await
}

fn session_in_path(path: &str) -> Option<Uuid> {
    let rest = path.strip_prefix("/sessions/")?;
    let segment = rest.split('/').next()?;
    Uuid::parse_str(segment).ok()
}
