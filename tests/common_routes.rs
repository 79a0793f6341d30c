mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn health_and_version() {
    let app = common::spawn_app().await;
    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.json(), json!({"status": "ok"}));

    let version = app.get("/version").await.json();
    assert_eq!(version["name"], "resource-hub");
}

#[tokio::test]
async fn ready_reflects_store_state() {
    let app = common::spawn_app().await;
    let ready = app.get("/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.json(), json!({"status": "ok", "database": "ok"}));

    app.pool.close().await;
    let degraded = app.get("/ready").await;
    assert_eq!(degraded.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(degraded.json()["database"], "unavailable");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = common::spawn_app().await;
    let huge = format!(
        r#"{{"handle": "{}", "weight": 1, "price": 1}}"#,
        "x".repeat(resource_hub::routes::MAX_BODY_BYTES)
    );
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/products/")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, huge.len())
        .body(Body::from(huge))
        .unwrap();
    let res = app.send(req).await;
    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.count("product").await, 0);
}
