//! JSON-RPC 2.0 envelope representations
//!
//! Wire-level request/response structs shared by both transports, plus the
//! error codes the protocol commits to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_REQUEST: i32 = -32600;
pub const INTERNAL_ERROR: i32 = -32603;
pub const TOOL_EXECUTION_ERROR: i32 = -32000;

/// Correlation id; a number or a string per the JSON-RPC spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// Inbound request envelope. A request without an id is a notification and
/// never receives a response.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub id: Option<RpcId>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Outbound response envelope. The id is always emitted, echoing the request
/// (or null when the request could not be parsed).
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(error),
        }
    }

    pub fn error_code(&self) -> Option<i32> {
        self.error.as_ref().map(|error| error.code)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self {
            code: PARSE_ERROR,
            message: "Parse error".to_string(),
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
        }
    }

    pub fn not_initialized() -> Self {
        Self {
            code: INVALID_REQUEST,
            message: "Server not initialized".to_string(),
        }
    }

    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: format!("Internal error: {detail}"),
        }
    }

    pub fn tool_execution(detail: impl std::fmt::Display) -> Self {
        Self {
            code: TOOL_EXECUTION_ERROR,
            message: format!("Tool execution error: {detail}"),
        }
    }
}
