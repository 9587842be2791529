use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod audit;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod rpc;
pub mod stdio;

use rpc::dispatcher::Dispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", post(http::handlers::rpc_endpoint))
        .route("/health", get(http::handlers::health))
        .route("/tools", get(http::handlers::list_tools))
        .route("/call_tool", post(http::handlers::call_tool))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
