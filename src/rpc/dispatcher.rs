//! The central request dispatcher
//!
//! Decodes JSON-RPC envelopes, routes the fixed method set, validates and
//! coerces `tools/call` arguments against the registered Descriptor, and
//! invokes the resolved operation. Holds no per-call state; one instance is
//! shared by every transport.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::audit::{AuditOutcome, AuditSink};
use crate::domain::registry::{value_as_integer, Args, OpOutput, Operation, ParamType, Registry};
use crate::errors::{CallError, DomainError};
use crate::rpc::envelope::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub struct Dispatcher {
    registry: Arc<Registry>,
    audit: Arc<dyn AuditSink>,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>, audit: Arc<dyn AuditSink>) -> Self {
        Self { registry, audit }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decode raw bytes and dispatch. An unreadable envelope yields a parse
    /// error with a null id; a notification yields nothing at all.
    pub fn handle_raw(&self, payload: &[u8]) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_slice(payload) {
            Ok(request) => request,
            Err(_) => {
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error()));
            }
        };

        self.handle(request)
    }

    /// Dispatch a decoded envelope, echoing its id on every emitted response
    /// and suppressing emission entirely for notifications.
    pub fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let notification = request.is_notification();
        let method = request.method.clone();

        let response = self.route(request);
        let outcome = match response.as_ref().and_then(JsonRpcResponse::error_code) {
            Some(_) => AuditOutcome::Failure,
            None => AuditOutcome::Success,
        };
        self.audit.record(&method, outcome);

        if notification {
            return None;
        }
        response
    }

    fn route(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let JsonRpcRequest { id, method, params } = request;

        let response = match method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result()),
            "tools/list" => match serde_json::to_value(self.registry.descriptors()) {
                Ok(tools) => JsonRpcResponse::success(id, json!({ "tools": tools })),
                Err(err) => JsonRpcResponse::error(id, JsonRpcError::internal(err)),
            },
            "tools/call" => match self.call_tool(params) {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(error) => JsonRpcResponse::error(id, error),
            },
            "notifications/initialized" => return None,
            "ping" => JsonRpcResponse::success(id, json!({})),
            _ => JsonRpcResponse::error(id, JsonRpcError::method_not_found(&method)),
        };

        Some(response)
    }

    fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params = params.unwrap_or(Value::Null);
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| JsonRpcError::tool_execution(CallError::MissingToolName))?;
        let arguments = params
            .get("arguments")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let output = self
            .invoke_tool(name, &arguments)
            .map_err(JsonRpcError::tool_execution)?;

        Ok(json!({
            "content": [{ "type": "text", "text": output.as_text() }]
        }))
    }

    /// Resolve, validate, coerce, invoke. Shared by the envelope path and the
    /// convenience HTTP invoke endpoint.
    pub fn invoke_tool(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<OpOutput, CallError> {
        let operation = self
            .registry
            .resolve(name)
            .ok_or_else(|| CallError::UnknownTool(name.to_string()))?;

        let coerced = coerce_arguments(operation, arguments)?;
        operation.invoke(&Args::new(&coerced)).map_err(CallError::from)
    }
}

/// Check each declared parameter against its Descriptor entry and coerce
/// integer/float mismatches. Arguments the Descriptor does not name pass
/// through untouched.
pub fn coerce_arguments(
    operation: &Operation,
    arguments: &Map<String, Value>,
) -> Result<Map<String, Value>, DomainError> {
    let mut coerced = arguments.clone();

    for spec in operation.params() {
        let Some(value) = arguments.get(spec.name) else {
            if spec.required {
                return Err(DomainError::MissingParameter(spec.name.to_string()));
            }
            continue;
        };

        let replacement = match spec.kind {
            ParamType::Number => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| DomainError::ExpectedNumber(spec.name.to_string()))?;
                json!(number)
            }
            ParamType::Integer => {
                let int = value_as_integer(value)
                    .ok_or_else(|| DomainError::ExpectedInteger(spec.name.to_string()))?;
                json!(int)
            }
            ParamType::Boolean => {
                value
                    .as_bool()
                    .ok_or_else(|| DomainError::ExpectedBoolean(spec.name.to_string()))?;
                value.clone()
            }
            ParamType::Array => {
                value
                    .as_array()
                    .ok_or_else(|| DomainError::ExpectedNumberArray(spec.name.to_string()))?;
                value.clone()
            }
            ParamType::String => {
                value
                    .as_str()
                    .ok_or_else(|| DomainError::ExpectedString(spec.name.to_string()))?;
                value.clone()
            }
        };
        coerced.insert(spec.name.to_string(), replacement);
    }

    Ok(coerced)
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
