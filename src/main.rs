use std::sync::Arc;

use calculator_mcp::{
    audit::TracingAudit,
    build_app,
    config::{Catalog, Config, Transport},
    domain::registry::Registry,
    logging,
    rpc::dispatcher::Dispatcher,
    stdio::StdioServer,
    AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let registry = Arc::new(match config.catalog {
        Catalog::Full => Registry::full(),
        Catalog::Minimal => Registry::minimal(),
    });
    let dispatcher = Arc::new(Dispatcher::new(registry, Arc::new(TracingAudit)));

    match config.transport {
        Transport::Stdio => {
            info!(
                operations = dispatcher.registry().len(),
                "serving framed stream session on stdio"
            );
            StdioServer::new(dispatcher).run().await?;
        }
        Transport::Http => {
            let bind_socket = config.bind_socket()?;
            let app = build_app(AppState::new(dispatcher));
            let listener = tokio::net::TcpListener::bind(bind_socket).await?;

            info!(
                bind_addr = %config.bind_addr,
                bind_port = config.bind_port,
                "server starting"
            );

            axum::serve(listener, app.into_make_service()).await?;
        }
    }

    Ok(())
}
