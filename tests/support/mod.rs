#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use activities::database::ActivityDirectory;
use activities::web::router::build_router;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Fresh router over a freshly seeded directory.
pub fn app() -> Router {
    build_router(Arc::new(ActivityDirectory::seeded()), static_dir())
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub async fn send(app: &Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_json(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = send(app, method, uri).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn activities(app: &Router) -> Value {
    let (status, body) = send_json(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    body
}

pub fn participants(listing: &Value, activity: &str) -> Vec<String> {
    listing[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}
