use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::AppState;

pub const GREETING: &str = "Hello from CI/CD!";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub build: String,
    pub environment: String,
    pub timestamp: String,
}

/// GET /
///
/// Greeting with the build identifier and environment the process was
/// started with, stamped with the current UTC time.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: GREETING,
        status: "OK",
        build: state.config.build_number.clone(),
        environment: state.config.environment.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
