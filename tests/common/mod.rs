//! Shared helpers for integration tests.
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tour_agency::app::{tour_create, TourCreateReq, TourDto};
use tour_agency::http::{router, AppState, TourStore};
use tour_agency::infra::{init_db, Database};
use tower::ServiceExt;

/// Database in a temporary directory, removed when dropped.
pub struct TestDb {
    db: Database,
    _dir: TempDir,
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db = init_db(&dir.path().join("tours.sqlite")).unwrap();
    TestDb { db, _dir: dir }
}

pub fn make_create_req(title: &str) -> TourCreateReq {
    TourCreateReq {
        title: title.to_string(),
        description: format!("All about {}", title),
        price: 100.0,
        destination: "Somewhere".to_string(),
    }
}

pub fn seed(db: &Database, title: &str) -> TourDto {
    tour_create(db, make_create_req(title)).unwrap()
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn app_for(store: Arc<dyn TourStore>) -> Router {
    router(AppState::new(store), &static_dir())
}

pub fn app(db: &TestDb) -> Router {
    app_for(Arc::new(db.db.clone()))
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send_raw(app, req).await;
    let value = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&body).unwrap()
    };
    (status, value)
}
