//! Decision HTTP API
//!
//! Endpoints:
//!   GET  /status               - Crate version, policy fingerprint, roles
//!   GET  /roles/:role/pages    - Pages available to a role
//!   GET  /roles/:role/actions  - Actions available to a role
//!   POST /check                - Check one page or action for a role

use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{get_available_actions, get_available_pages, policy_fingerprint, PermissionKind, Role, RoleClaim};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CheckReq {
    /// Missing or null means no authenticated role.
    #[serde(default)]
    pub role: Option<String>,
    pub kind: PermissionKind,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckRes {
    pub allowed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusRes {
    pub version: String,
    pub policy_fingerprint: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn get_status() -> Json<ApiResponse<StatusRes>> {
    Json(ApiResponse::ok(StatusRes {
        version: env!("CARGO_PKG_VERSION").to_string(),
        policy_fingerprint: policy_fingerprint().to_string(),
        roles: Role::ALL.to_vec(),
    }))
}

async fn get_role_pages(Path(role): Path<String>) -> Json<ApiResponse<Vec<&'static str>>> {
    Json(ApiResponse::ok(get_available_pages(&role)))
}

async fn get_role_actions(Path(role): Path<String>) -> Json<ApiResponse<Vec<&'static str>>> {
    Json(ApiResponse::ok(get_available_actions(&role)))
}

async fn post_check(Json(req): Json<CheckReq>) -> Json<ApiResponse<CheckRes>> {
    let allowed = RoleClaim(req.role.as_deref()).permits(req.kind, &req.name);
    info!(role = ?req.role, kind = %req.kind, name = %req.name, allowed, "check");
    Json(ApiResponse::ok(CheckRes { allowed }))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/status", get(get_status))
        .route("/roles/:role/pages", get(get_role_pages))
        .route("/roles/:role/actions", get(get_role_actions))
        .route("/check", post(post_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
