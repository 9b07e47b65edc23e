use std::{io, sync::Arc};

use anyhow::Result;
use axum::{Router, serve};
use dotenv::dotenv;
use rmcp::{
    ServiceExt,
    transport::{
        StreamableHttpServerConfig, StreamableHttpService, stdio,
        streamable_http_server::session::local::LocalSessionManager,
    },
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod mcp;
use mcp::{
    LeaveMCPFactory,
    config::{LogFormat, Settings, Transport},
    store::LeaveStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    let settings = Settings::load()?;
    init_tracing(settings.log_format);

    let store = Arc::new(LeaveStore::seeded());
    info!(employees = store.len(), transport = %settings.transport, "Leave store seeded");

    match settings.transport {
        Transport::Http => serve_http(&settings, store).await,
        Transport::Stdio => serve_stdio(store).await,
    }
}

// Logs go to stderr so stdout stays free for stdio protocol frames.
fn init_tracing(log_format: LogFormat) {
    let json = log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".to_string().into()))
        .with(json.then(|| fmt::layer().json().with_writer(io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(io::stderr)))
        .init();
}

async fn serve_http(settings: &Settings, store: Arc<LeaveStore>) -> Result<()> {
    // Setting up the Streamable HTTP Service; every session shares the store
    info!("Setting up the Streamable HTTP Service for the leave MCP server");
    let service = StreamableHttpService::new(
        move || Ok(LeaveMCPFactory::new(Arc::clone(&store))),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    info!("Starting server on {}{}", settings.bind_address, settings.mcp_path);
    let router = Router::new().nest_service(&settings.mcp_path, service);
    let tcp_listener = TcpListener::bind(settings.bind_address).await?;

    // Graceful shutdown on CTRL+C
    let shutdown = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            error!("failed to install CTRL+C handler: {e}");
        });
    };

    serve(tcp_listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn serve_stdio(store: Arc<LeaveStore>) -> Result<()> {
    info!("Serving the leave MCP server over stdio");
    let service = LeaveMCPFactory::new(store)
        .serve(stdio())
        .await
        .inspect_err(|e| error!("failed to start stdio session: {e}"))?;

    let quit_reason = service.waiting().await?;
    info!(?quit_reason, "stdio session ended");
    Ok(())
}
