//! Route definitions for token resolution.

use axum::routing::get;
use axum::Router;

use crate::handlers::resolve;
use crate::state::AppState;

/// Routes mounted at `/resolve`.
///
/// ```text
/// GET /          -> resolve_empty (fresh session, no token)
/// GET /{token}   -> resolve_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resolve::resolve_empty))
        .route("/{token}", get(resolve::resolve_token))
}
