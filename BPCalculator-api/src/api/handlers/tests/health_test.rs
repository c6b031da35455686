use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::api::create_application;
use crate::config::AppConfig;

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_application(AppConfig {
        environment: "test".to_string(),
        ..AppConfig::default()
    });

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Healthy");
    assert_eq!(body["service"], "BP Calculator + Category Explainer");
    assert_eq!(body["environment"], "test");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_metrics_count_completed_requests() {
    let app = create_application(AppConfig::default());

    let (status, _) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    // The metrics request itself is counted only after it completes
    assert_eq!(body["requestsServed"], 1);
    assert!(body["uptimeSeconds"].as_i64().unwrap() >= 0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = get(create_application(AppConfig::default()), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
