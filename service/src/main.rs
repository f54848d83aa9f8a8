use tracing::info;

use demo_service::server;
use demo_service::{AppState, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignored in production where env vars are set externally)
    let _ = dotenvy::dotenv();

    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    info!(
        "Configuration loaded (port={}, build={}, environment={})",
        config.port, config.build_number, config.environment
    );

    let addr = config.bind_addr();
    let app = server::router(AppState::new(config));

    let listener = server::bind(addr).await?;
    info!("CI/CD demo service listening on {}", addr);
    info!("Routes:");
    info!("  GET  /");
    info!("  GET  /health");

    server::run(listener, app, server::shutdown_signal()).await
}
