use clap::Parser;
use post_service::api::context::AppContext;
use post_service::config::Config;
use post_service::server::app;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting on {}", config.bind);
    tracing::info!(
        "Validation: {:?}, deadlines: {:?}",
        config.validation,
        config.deadlines()
    );

    // 1. Stores:
    let ctx = Arc::new(AppContext::from_config(&config));

    // 2. HTTP Router:
    let app = app(ctx);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app).await?;

    Ok(())
}
