//! kondate-server: HTTP recipe search.
//!
//! Reads an optional JSON config file from the first argument, then `KONDATE_*`
//! environment variables (see `ServiceConfig`).

use kondate::config::ServiceConfig;
use kondate::server::build_router;
use kondate::service::RecipeService;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kondate=debug".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ServiceConfig::from_file(&path) {
            Ok(config) => config.with_env_overrides(),
            Err(e) => {
                eprintln!("Failed to read config '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => ServiceConfig::from_env(),
    };

    let bind_addr = config.bind_addr.clone();
    let service = Arc::new(RecipeService::bootstrap(config));
    let app = build_router(service);

    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("kondate-server listening on {bind_addr}");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
