//! Axum HTTP handlers for the request/response binding
//!
//! Provides the primary RPC envelope endpoint plus the convenience discovery,
//! invoke, and liveness endpoints that bypass the envelope.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::rpc::envelope::{INTERNAL_ERROR, PARSE_ERROR};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Deserialize)]
struct CallToolBody {
    tool: Option<String>,
    #[serde(default)]
    arguments: Map<String, Value>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
    })
}

/// Descriptor list without the envelope, for plain HTTP discovery.
pub async fn list_tools(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "tools": state.dispatcher.registry().descriptors(),
    }))
}

/// Invoke a single tool without an envelope or correlation id.
pub async fn call_tool(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: CallToolBody = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return failure(StatusCode::BAD_REQUEST, "Invalid JSON payload");
        }
    };

    let Some(tool) = payload
        .tool
        .as_deref()
        .map(str::trim)
        .filter(|tool| !tool.is_empty())
    else {
        return failure(StatusCode::BAD_REQUEST, "Tool name is required");
    };

    match state.dispatcher.invoke_tool(tool, &payload.arguments) {
        Ok(output) => Json(json!({
            "success": true,
            "result": output.to_value(),
        }))
        .into_response(),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}

/// Full envelope endpoint. Notifications produce 204 with no body.
pub async fn rpc_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    match state.dispatcher.handle_raw(&body) {
        None => StatusCode::NO_CONTENT.into_response(),
        Some(response) => {
            let status = match response.error_code() {
                Some(PARSE_ERROR) => StatusCode::BAD_REQUEST,
                Some(INTERNAL_ERROR) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::OK,
            };
            (status, Json(response)).into_response()
        }
    }
}

fn failure(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(json!({
            "success": false,
            "error": error,
        })),
    )
        .into_response()
}
