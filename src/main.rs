use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::ServerConfig;
use activities::web;

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 2. Configuration and seed data
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let store = match config.build_store() {
        Ok(s) => s,
        Err(e) => {
            error!("failed to load activities: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        build_id = env!("ACTIVITIES_BUILD_ID"),
        activities = store.count_activities().await,
        static_dir = %config.static_dir.display(),
        "activity directory ready"
    );

    // 3. Build the application
    let app = web::build_router(store, &config.static_dir);

    // 4. Bind (with fallback port)
    let addr = match config.socket_addr() {
        Ok(a) => a,
        Err(e) => {
            error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = match config.socket_addr_for_port(config.port.saturating_add(1)) {
                Ok(a) => a,
                Err(e) => {
                    error!("configuration error: {}", e);
                    std::process::exit(1);
                }
            };
            warn!("could not bind {}: {}; trying fallback {}", addr, e, fallback);
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("could not bind fallback {}: {}", fallback, e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("server listening on http://{}", bound),
        Err(e) => warn!("listener has no local address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
