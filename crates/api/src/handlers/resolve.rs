//! Handlers for session-token resolution.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use leadlink_db::access::{self, Resolution};

use crate::error::AppResult;
use crate::state::AppState;

/// Body of a successful resolution. `project_id` is `None` for a fresh,
/// unsaved session; `has_secret` reports whether the presented token grants
/// edit rights.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub project_id: Option<Uuid>,
    pub has_secret: bool,
}

/// GET /api/v1/resolve -- no token: a brand-new session.
pub async fn resolve_empty() -> Json<ResolveResponse> {
    Json(ResolveResponse {
        project_id: None,
        has_secret: false,
    })
}

/// GET /api/v1/resolve/{token}
///
/// Tries the token as an edit secret first, then as a public project id.
/// An unknown token yields 404 with a `redirect` hint so the client moves
/// back to the root URL.
pub async fn resolve_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Response> {
    let resolution = access::resolve(state.store.as_ref(), Some(&token)).await?;
    let response = match resolution {
        Resolution::Empty => Json(ResolveResponse {
            project_id: None,
            has_secret: false,
        })
        .into_response(),
        Resolution::Resolved {
            project_id,
            secret_id,
        } => Json(ResolveResponse {
            project_id: Some(project_id),
            has_secret: secret_id.is_some(),
        })
        .into_response(),
        Resolution::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Unknown token",
                "code": "NOT_FOUND",
                "redirect": "/",
            })),
        )
            .into_response(),
    };
    Ok(response)
}
