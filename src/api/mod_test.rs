use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use super::{AppState, Config, default_filter, routes};
use crate::db::{Database, SqliteDatabase};

async fn test_app(enable_docs: bool) -> axum::Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    routes::create_router(AppState::new(db), enable_docs)
}

#[test]
fn config_default_listens_on_port_3000() {
    let config = Config::default();
    assert_eq!(config.port, 3000);
    assert!(config.host.is_unspecified());
    assert!(!config.enable_docs);
}

#[test]
fn verbosity_raises_log_level() {
    assert!(default_filter(0).contains("kanban=info"));
    assert!(default_filter(1).contains("kanban=debug"));
    assert!(default_filter(9).contains("kanban=trace"));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok() {
    let response = test_app(false)
        .await
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn docs_only_when_enabled() {
    let disabled = test_app(false)
        .await
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(disabled.status(), StatusCode::NOT_FOUND);

    let enabled = test_app(true)
        .await
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(enabled.status(), StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn cors_preflight_is_allowed() {
    let response = test_app(false)
        .await
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/boards")
                .header("origin", "http://localhost:8080")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
