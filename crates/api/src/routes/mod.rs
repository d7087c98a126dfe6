pub mod health;
pub mod project;
pub mod resolve;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /resolve                    token resolution (empty session)
/// /resolve/{token}            token resolution
///
/// /projects                   create
/// /projects/{id}              get (public id) / update, delete (secret)
/// /projects/{id}/progress     derived progress metrics
/// /projects/{id}/leads        list, create
/// /projects/{id}/leads/{id}   update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/resolve", resolve::router())
        .nest("/projects", project::router())
}
