//! Handlers for the per-project `/leads` sub-collection.
//!
//! Lead writes are keyed by the public project id alone; edit-link
//! possession is enforced in the client flow, not at this boundary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use leadlink_core::lead::{Lead, LeadData};
use leadlink_db::ops;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLead {
    pub lead_id: Uuid,
}

/// GET /api/v1/projects/{id}/leads
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> AppResult<Json<Vec<Lead>>> {
    let leads = ops::list_leads(state.store.as_ref(), project_id).await?;
    Ok(Json(leads))
}

/// POST /api/v1/projects/{id}/leads
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(input): Json<LeadData>,
) -> AppResult<(StatusCode, Json<CreatedLead>)> {
    let lead_id = ops::add_lead(state.store.as_ref(), project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(CreatedLead { lead_id })))
}

/// PUT /api/v1/projects/{id}/leads/{lead_id} -- full-field overwrite.
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, lead_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<LeadData>,
) -> AppResult<StatusCode> {
    ops::update_lead(state.store.as_ref(), project_id, lead_id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/projects/{id}/leads/{lead_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, lead_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    ops::delete_lead(state.store.as_ref(), project_id, lead_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
