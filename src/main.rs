use clap::Parser;
use slideshow_api::{AppState, Config, S3Backend, StorageBackend, create_app};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Local development: pick up a .env file if there is one
    let dotenv_path = dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    if let Some(path) = dotenv_path {
        tracing::info!("Loaded environment from {}", path.display());
    }

    // Parse command line arguments (with environment fallbacks)
    let config = Config::parse();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Using bucket: {}", config.bucket);
    tracing::info!("Using region: {}", config.region);
    tracing::info!("Signed URLs expire after {}s", config.url_expires_seconds);
    if let Some(endpoint) = &config.endpoint {
        tracing::info!("Using custom S3 endpoint: {}", endpoint);
    }

    let storage: Arc<dyn StorageBackend> = Arc::new(S3Backend::new(&config).await);
    let app_state = AppState::new(storage, config.bucket.clone(), config.url_expires());
    let app = create_app(app_state);

    // Start server
    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Slideshow API listening on {}", addr);
    tracing::info!("Example: curl http://localhost:{}/api/images", config.port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
