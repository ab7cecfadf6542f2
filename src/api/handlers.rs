//! API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::docs::openapi_document;
use crate::api::{AppState, DOCS_PATH, LOGS_PATH};
use crate::logs::sample_logs;

pub const RUNNING_MESSAGE: &str = "SDET Challenge API is running";

/// Health check and endpoint listing
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: RUNNING_MESSAGE.to_string(),
        endpoints: Endpoints {
            logs: LOGS_PATH.to_string(),
            docs: DOCS_PATH.to_string(),
        },
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    pub logs: String,
    pub docs: String,
}

/// Canned log listing
pub async fn logs() -> Json<LogsResponse> {
    let logs = sample_logs();
    tracing::debug!(count = logs.len(), "Serving sample logs");
    Json(LogsResponse { logs })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<String>,
}

/// OpenAPI document for this service
pub async fn docs(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(openapi_document(&state.public_url))
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
