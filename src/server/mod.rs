//! HTTP query layer exposing the lookups as JSON endpoints.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::INTERNAL_ERROR_MESSAGE;
use crate::riot::RiotApi;

mod handlers;
mod params;

/// Shared application state containing all dependencies
#[derive(Clone, Debug)]
pub struct AppState {
    pub riot: Arc<dyn RiotApi>,
}

impl AppState {
    pub fn new(riot: Arc<dyn RiotApi>) -> Self {
        Self { riot }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/account", get(handlers::account))
        .route("/api/summoner", get(handlers::summoner))
        .route("/api/league", get(handlers::league))
        .route("/api/matches/by-puuid", get(handlers::matches))
        .route("/api/profile", get(handlers::profile))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "🌐 ❌ Handler panicked");

    let body = Json(json!({
        "success": false,
        "error": INTERNAL_ERROR_MESSAGE,
    }));

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
