//! API routes for the profile server

use crate::domain::model::{HealthResponse, ProfileResponse};
use crate::server::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

pub fn root_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(api_info))
}

async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "Profile API with Cat Facts",
        "endpoints": {
            "/me": "GET - Returns profile information with a cat fact",
            "/health": "GET - Service health check"
        }
    }))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

/// 健康檢查不碰上游，永遠回 200
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}

pub fn profile_routes() -> Router<AppStateArc> {
    Router::new().route("/me", get(get_profile))
}

async fn get_profile(State(state): State<AppStateArc>) -> Json<ProfileResponse> {
    info!("GET /me endpoint called");
    Json(state.profile.build_response().await)
}
