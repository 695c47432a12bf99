//! Decision API tests
//!
//! Run with: cargo test --features server

#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::json;
use tower::ServiceExt;

use hifz_access::server::{router, ApiResponse, CheckRes, StatusRes};
use hifz_access::{policy_fingerprint, Role};

async fn send<T: DeserializeOwned>(req: Request<Body>) -> (StatusCode, Option<ApiResponse<T>>) {
    let res = router().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).ok())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn check(body: serde_json::Value) -> Request<Body> {
    Request::post("/check")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn allowed(body: serde_json::Value) -> bool {
    let (status, res) = send::<CheckRes>(check(body)).await;
    assert_eq!(status, StatusCode::OK);
    let res = res.unwrap();
    assert!(res.success);
    res.data.unwrap().allowed
}

#[tokio::test]
async fn status_reports_fingerprint_and_roles() {
    let (status, res) = send::<StatusRes>(get("/status")).await;
    assert_eq!(status, StatusCode::OK);
    let data = res.unwrap().data.unwrap();
    assert_eq!(data.policy_fingerprint, policy_fingerprint());
    assert_eq!(data.roles, Role::ALL.to_vec());
}

#[tokio::test]
async fn role_listings() {
    let (_, res) = send::<Vec<String>>(get("/roles/teacher/pages")).await;
    assert_eq!(res.unwrap().data.unwrap().len(), 7);

    let (_, res) = send::<Vec<String>>(get("/roles/admin/actions")).await;
    let actions = res.unwrap().data.unwrap();
    assert_eq!(actions.len(), 9);
    assert!(!actions.iter().any(|a| a.ends_with("-delete")));

    let (status, res) = send::<Vec<String>>(get("/roles/guest/pages")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(res.unwrap().data.unwrap().is_empty());

    let (status, res) = send::<Vec<String>>(get("/roles/guest/actions")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(res.unwrap().data.unwrap().is_empty());
}

#[tokio::test]
async fn checks() {
    assert!(allowed(json!({ "role": "superadmin", "kind": "page", "name": "settings" })).await);
    assert!(!allowed(json!({ "role": "teacher", "kind": "action", "name": "student-delete" })).await);
    assert!(allowed(json!({ "role": "teacher", "kind": "action", "name": "exam-edit" })).await);
    assert!(!allowed(json!({ "role": "guest", "kind": "page", "name": "dashboard" })).await);
    assert!(!allowed(json!({ "role": null, "kind": "page", "name": "dashboard" })).await);
    assert!(!allowed(json!({ "kind": "page", "name": "dashboard" })).await);
}

#[tokio::test]
async fn rejects_unknown_kind() {
    let (status, _) = send::<CheckRes>(check(json!({ "role": "admin", "kind": "menu", "name": "x" }))).await;
    assert!(status.is_client_error());
}
