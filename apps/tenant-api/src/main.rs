//! Kiosk tenant lifecycle API server.
//!
//! Control plane for a database-per-tenant Postgres cluster: provisioning,
//! login, module sync, status inspection, listing and disablement.

mod config;
mod health;
mod logging;
mod openapi;

use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use config::Config;
use health::{health_handler, readyz_handler};
use kiosk_api_tenants::{tenant_router, ApiKeys};
use kiosk_db::{TenantConnector, TenantDirectory};
use openapi::swagger_routes;

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting tenant API"
    );

    // Maintenance database pool (control plane)
    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            info!("Maintenance database connection established");
            pool
        }
        Err(e) => {
            eprintln!("Failed to connect to maintenance database: {e}");
            std::process::exit(1);
        }
    };

    // The directory backs tenant visibility; the server cannot answer
    // listings correctly without it.
    if let Err(e) = TenantDirectory::ensure_schema(&pool).await {
        eprintln!("FATAL: Failed to prepare tenant directory: {e}");
        std::process::exit(1);
    }

    let connector = match TenantConnector::from_url(&config.database_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("FATAL: Invalid DATABASE_URL: {e}");
            std::process::exit(1);
        }
    };

    let keys = ApiKeys {
        admin_key: config.admin_api_key.clone(),
        service_key: config.service_api_key.clone(),
    };
    if keys.service_key.is_none() {
        tracing::warn!("SERVICE_API_KEY not set; service tier endpoints are open");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/readyz", get(readyz_handler))
        .with_state(pool.clone())
        .merge(swagger_routes())
        .nest("/tenant", tenant_router(pool, connector, keys))
        .layer(cors);

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Graceful shutdown on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
