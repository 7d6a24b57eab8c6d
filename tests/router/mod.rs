use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use timebook::server::{model::app::AppState, router::routes};
use timebook_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::json_body;

fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

#[tokio::test]
/// Expect the OpenAPI document to list the statistics endpoint
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let document: serde_json::Value = json_body(resp).await;
    assert!(document["paths"]["/api/statistics/bookings"]["get"].is_object());
    assert!(document["paths"]["/api/bookings/{booking_id}"]["delete"].is_object());

    Ok(())
}

#[tokio::test]
/// Expect 401 for statistics requested without a session cookie
async fn rejects_statistics_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/statistics/bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the session cookie set by login to authenticate following requests
async fn login_cookie_authenticates_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_mock_user("jdoe", TEST_PASSWORD_HASH, "Jane", "Doe", Some("employee"))
        .build()
        .await?;
    let app = app(&test);

    let login_body = serde_json::json!({ "uid": "jdoe", "password": TEST_PASSWORD });
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(login_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
        .unwrap();

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/statistics/bookings")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
