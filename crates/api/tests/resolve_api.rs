//! HTTP-level tests for token resolution.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_project, get, test_app};

#[tokio::test]
async fn no_token_resolves_to_an_empty_session() {
    let (app, _) = test_app();
    let response = get(app, "/api/v1/resolve").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["projectId"].is_null());
    assert_eq!(json["hasSecret"], false);
}

#[tokio::test]
async fn unknown_token_returns_404_with_root_redirect() {
    let (app, _) = test_app();
    let token = uuid::Uuid::new_v4();
    let response = get(app, &format!("/api/v1/resolve/{token}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["redirect"], "/");
}

#[tokio::test]
async fn malformed_token_returns_404() {
    let (app, _) = test_app();
    let response = get(app, "/api/v1/resolve/definitely-not-an-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn secret_token_resolves_with_edit_rights() {
    let (_, store) = test_app();
    let (project_id, secret_id) = create_project(store.clone(), "Q1 Outreach", 10).await;

    let app = build_test_app(store);
    let response = get(app, &format!("/api/v1/resolve/{secret_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["projectId"], project_id.as_str());
    assert_eq!(json["hasSecret"], true);
}

#[tokio::test]
async fn public_id_resolves_read_only() {
    let (_, store) = test_app();
    let (project_id, _) = create_project(store.clone(), "Q1 Outreach", 10).await;

    let app = build_test_app(store);
    let response = get(app, &format!("/api/v1/resolve/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["projectId"], project_id.as_str());
    assert_eq!(json["hasSecret"], false);
}

#[tokio::test]
async fn resolution_is_idempotent_over_http() {
    let (_, store) = test_app();
    let (_, secret_id) = create_project(store.clone(), "Q1 Outreach", 10).await;

    let first = body_json(
        get(
            build_test_app(store.clone()),
            &format!("/api/v1/resolve/{secret_id}"),
        )
        .await,
    )
    .await;
    let second = body_json(
        get(
            build_test_app(store),
            &format!("/api/v1/resolve/{secret_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(first, second);
}
