//! My Bus server library logic.

pub mod config;

use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use mybus_skill::Skill;
use mybus_types::envelope::{RequestEnvelope, ResponseEnvelope};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The skill dispatcher; owns the MBTA predictions client.
    pub skill: Arc<Skill>,
}

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load balancers,
/// monitoring, and CI to verify the server is running.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `POST /` — the voice platform's skill endpoint.
///
/// Always answers 200 with a response envelope once the body deserializes;
/// skill-level failures come back as the apology speech, which is what the
/// platform expects instead of an HTTP error.
async fn skill_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Json<ResponseEnvelope> {
    Json(state.skill.handle(envelope).await)
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", post(skill_handler))
        .route("/health", get(health))
        .layer(Extension(Arc::new(state)))
        .layer(TraceLayer::new_for_http())
}
