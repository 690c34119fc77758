use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::{AppConfig, SERVICE_VERSION};
use activities::database::ActivityDirectory;
use activities::error::ServerError;
use activities::web::router::build_router;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(AppConfig::from_env()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), ServerError> {
    // 2. Seed the directory
    let directory = Arc::new(ActivityDirectory::seeded());

    // 3. Build the application
    let app = build_router(directory, &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr = config.bind_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}. trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        version = SERVICE_VERSION,
        static_dir = %config.static_dir.display(),
        "listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
