//! Route definitions for the `/projects` resource and its nested lead
//! sub-collection.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{lead, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// The `{id}` segment is the public project id on reads; on PUT and DELETE
/// of the project itself it is the edit SECRET (the bearer capability).
///
/// ```text
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id (public id)
/// PUT    /{secret}                  -> update    (secret)
/// DELETE /{secret}                  -> delete    (secret)
/// GET    /{id}/progress             -> progress
///
/// GET    /{id}/leads                -> list
/// POST   /{id}/leads                -> create
/// PUT    /{id}/leads/{lead_id}      -> update
/// DELETE /{id}/leads/{lead_id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    let lead_routes = Router::new()
        .route("/", get(lead::list).post(lead::create))
        .route("/{lead_id}", put(lead::update).delete(lead::delete));

    Router::new()
        .route("/", post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/progress", get(project::progress))
        .nest("/{id}/leads", lead_routes)
}
