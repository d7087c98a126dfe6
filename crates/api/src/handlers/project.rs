//! Handlers for the `/projects` resource.
//!
//! Reads are keyed by the public project id. Mutations are keyed by the
//! edit secret: the `{secret}` path segment of PUT and DELETE is the bearer
//! capability, re-validated against storage on every call.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use leadlink_core::project::{Project, ProjectData};
use leadlink_core::projection::{self, ProgressSnapshot};
use leadlink_db::ops;

use crate::error::AppResult;
use crate::state::AppState;

/// Body of a successful creation: the shareable public id and the private
/// edit secret, minted together.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProject {
    pub project_id: Uuid,
    pub secret_id: Uuid,
}

/// POST /api/v1/projects
///
/// The `Location` header carries the secret-bearing URL the client should
/// navigate to.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectData>,
) -> AppResult<Response> {
    let (project_id, secret_id) = ops::create_project(state.store.as_ref(), &input).await?;
    let response = (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/{secret_id}"))],
        Json(CreatedProject {
            project_id,
            secret_id,
        }),
    )
        .into_response();
    Ok(response)
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    let project = ops::get_project(state.store.as_ref(), id).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProgressSnapshot>> {
    let project = ops::get_project(state.store.as_ref(), id).await?;
    let leads = ops::list_leads(state.store.as_ref(), id).await?;
    Ok(Json(projection::snapshot(&project, &leads, Utc::now())))
}

/// PUT /api/v1/projects/{secret} -- full replace, gated on the secret.
pub async fn update(
    State(state): State<AppState>,
    Path(secret): Path<Uuid>,
    Json(input): Json<ProjectData>,
) -> AppResult<StatusCode> {
    ops::update_project(state.store.as_ref(), Some(secret), &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/projects/{secret} -- gated on the secret.
pub async fn delete(
    State(state): State<AppState>,
    Path(secret): Path<Uuid>,
) -> AppResult<StatusCode> {
    ops::delete_project(state.store.as_ref(), Some(secret)).await?;
    Ok(StatusCode::NO_CONTENT)
}
